//! Functions for writing the layout in CSV format.
pub use csv::Error;
use crate::{Geometry, Span};
use csv::Writer;
use serde::Serialize;

/// A row of the layout table.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Row {
    /// `pin` or `tail`
    pub kind: &'static str,
    /// Index in its kind
    pub index: usize,
    /// Left bottom
    pub left_bottom: f64,
    /// Left top
    pub left_top: f64,
    /// Right top
    pub right_top: f64,
    /// Right bottom
    pub right_bottom: f64,
}

impl Row {
    fn new(kind: &'static str, index: usize, span: &Span) -> Self {
        let [left_bottom, left_top, right_top, right_bottom] = *span;
        Self { kind, index, left_bottom, left_top, right_top, right_bottom }
    }
}

/// Rows of the pins followed by the tails.
pub fn rows(geo: &Geometry) -> Vec<Row> {
    let pins = geo.pin_points.iter().enumerate();
    let tails = geo.tail_points.iter().enumerate();
    pins.map(|(i, span)| Row::new("pin", i, span))
        .chain(tails.map(|(i, span)| Row::new("tail", i, span)))
        .collect()
}

/// Dump the layout to CSV string, with a header line.
pub fn dump_csv(geo: &Geometry) -> Result<String, Box<dyn std::error::Error>> {
    let mut w = Writer::from_writer(Vec::new());
    rows(geo).into_iter().try_for_each(|row| w.serialize(row))?;
    Ok(String::from_utf8(w.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solve, JointCfg};

    #[test]
    fn dump() {
        let geo = solve(&JointCfg::box_joint());
        let s = dump_csv(&geo).unwrap();
        let mut lines = s.lines();
        assert_eq!(
            lines.next(),
            Some("kind,index,left_bottom,left_top,right_top,right_bottom")
        );
        assert_eq!(lines.next(), Some("pin,0,0.0,0.0,14.583333333333332,14.583333333333332"));
        assert_eq!(s.lines().count(), 1 + geo.pin_points.len() + geo.tail_points.len());
        assert!(s.lines().last().unwrap().starts_with("tail,4,"));
    }
}
