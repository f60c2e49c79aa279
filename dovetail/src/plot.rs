//! Plot the marking diagram of the tail board.
//!
//! The board is seen from its end: the baseline of the face is at `x = 0`,
//! the end of the board is at `x = thickness`, and the board width runs
//! downward.
//!
//! ```
//! use dovetail::{plot::*, solve, JointCfg, Unit};
//!
//! let cfg = JointCfg::new();
//! let geo = solve(&cfg);
//! let mut buf = String::new();
//! let svg = SVGBackend::with_string(&mut buf, (400, 800));
//! Diagram::new(&cfg, &geo).unit(Unit::Imperial).plot(svg).unwrap();
//! ```
use crate::{
    marking::{marks, Face},
    Geometry, JointCfg, Unit,
};
#[doc(no_inline)]
pub use plotters::{prelude::*, *};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::borrow::Cow;

/// Plotting result of the backend `B`.
pub type PResult<T, B> = Result<T, DrawingAreaErrorKind<<B as DrawingBackend>::ErrorType>>;
/// Drawing area of the backend `B`.
pub type Canvas<B> = DrawingArea<B, coord::Shift>;

/// Space on both sides of the board for the labels.
const LABEL_SPACE: f64 = 100.;
/// Space above and below the board.
const MARGIN: f64 = 10.;
const HIGHLIGHT: RGBColor = RGBColor(221, 51, 85);

macro_rules! inner_opt {
    ($($(#[$meta:meta])+ fn $name:ident($ty:ty))+) => {$(
        $(#[$meta])+
        pub fn $name(mut self, $name: $ty) -> Self {
            self.$name = $name;
            self
        }
    )+};
}

/// Marking diagram option.
#[derive(Clone, Debug)]
pub struct Diagram<'a> {
    cfg: &'a JointCfg,
    geo: &'a Geometry,
    unit: Unit,
    font: f64,
    stroke: u32,
    font_family: Cow<'a, str>,
}

impl<'a> Diagram<'a> {
    /// Create a diagram of the solved joint.
    pub fn new(cfg: &'a JointCfg, geo: &'a Geometry) -> Self {
        Self {
            cfg,
            geo,
            unit: Unit::default(),
            font: 12.,
            stroke: 2,
            font_family: Cow::Borrowed("Times New Roman"),
        }
    }

    /// Set the font family.
    pub fn font_family(mut self, family: impl Into<Cow<'a, str>>) -> Self {
        self.font_family = family.into();
        self
    }

    inner_opt! {
        /// Set the unit of the labels.
        fn unit(Unit)
        /// Set font size.
        fn font(f64)
        /// Set the line stroke of the outline.
        fn stroke(u32)
    }

    /// Outline of the tail board, one point per corner.
    ///
    /// The coordinates are `(x, y)` with `y` along the board width.
    pub fn outline(&self) -> Vec<(f64, f64)> {
        let t = self.cfg.thickness;
        let mut path = Vec::with_capacity(self.geo.tail_points.len() * 4 + 2);
        path.push((0., 0.));
        for &[left_bottom, left_top, right_top, right_bottom] in &self.geo.tail_points {
            path.extend([
                (0., left_top),
                (t, left_bottom),
                (t, right_bottom),
                (0., right_top),
            ]);
        }
        path.push((0., self.cfg.width));
        path
    }

    /// Plot the diagram.
    pub fn plot<B, R>(&self, root: R) -> PResult<(), B>
    where
        B: DrawingBackend,
        Canvas<B>: From<R>,
    {
        let root = Canvas::from(root);
        root.fill(&WHITE)?;
        let JointCfg { width, thickness, .. } = *self.cfg;
        // Flip the board width downward
        let mut chart = ChartBuilder::on(&root).build_cartesian_2d(
            -LABEL_SPACE..thickness + LABEL_SPACE,
            -(width + MARGIN)..MARGIN,
        )?;
        let outline = self.outline().into_iter().map(|(x, y)| (x, -y));
        chart.draw_series(LineSeries::new(outline, BLACK.stroke_width(self.stroke)))?;
        let font = (self.font_family.as_ref(), self.font).into_font();
        let left = Pos::new(HPos::Right, VPos::Center);
        let right = Pos::new(HPos::Left, VPos::Center);
        let ends = [(0., self.unit.fmt_len(0.)), (width, self.unit.fmt_len(width))];
        chart.draw_series(ends.into_iter().map(|(y, label)| {
            Text::new(label, (0., -y), font.clone().color(&BLACK).pos(left))
        }))?;
        chart.draw_series(marks(self.geo).into_iter().map(|m| {
            let color = if m.is_highlight() { HIGHLIGHT } else { BLACK };
            let (x, pos) = match m.face {
                Face::Line => (0., left),
                Face::Edge => (thickness, right),
            };
            let style = font.clone().color(&color).pos(pos);
            Text::new(m.label(self.unit), (x, -m.pos), style)
        }))?;
        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve;

    #[test]
    fn outline() {
        let cfg = JointCfg::new();
        let geo = solve(&cfg);
        let path = Diagram::new(&cfg, &geo).outline();
        assert_eq!(path.len(), geo.tail_points.len() * 4 + 2);
        assert_eq!(path[0], (0., 0.));
        assert_eq!(path[path.len() - 1], (0., cfg.width));
        // The tail is wider on the end of the board
        let [lt, lb, rb, rt] = [path[1].1, path[2].1, path[3].1, path[4].1];
        assert!(rb - lb > rt - lt);
    }

    #[test]
    fn plot_svg() {
        let cfg = JointCfg::new();
        let geo = solve(&cfg);
        let mut buf = String::new();
        {
            let svg = SVGBackend::with_string(&mut buf, (400, 800));
            Diagram::new(&cfg, &geo).plot(svg).unwrap();
        }
        assert!(buf.contains("<svg"));
        assert!(buf.contains("300 mm"));
    }
}
