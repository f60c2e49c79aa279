//! Marking out the tail board.
//!
//! Every tail has four marking points. The points on the near half of the
//! board are measured from the near edge (↑), the rest from the far edge (↓)
//! so the tape never has to span more than half of the board.
use crate::{Geometry, Span, Unit};

/// Where the point lies on the tail board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Face {
    /// On the end of the board, the wide side of the tail
    Edge,
    /// On the baseline of the face, the narrow side of the tail
    Line,
}

/// Which edge of the board to measure from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    /// From the first edge (↑)
    Near,
    /// From the opposite edge (↓)
    Far,
}

impl Side {
    /// Arrow symbol of the side.
    pub const fn arrow(&self) -> char {
        match self {
            Self::Near => '↑',
            Self::Far => '↓',
        }
    }
}

/// A marking point of a tail.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Index of the tail
    pub tail: usize,
    /// Index in the tail [`Span`]
    pub slot: usize,
    /// Coordinate from the near edge
    pub pos: f64,
    /// Position on the board
    pub face: Face,
    /// Edge to measure from
    pub side: Side,
    /// Distance to measure from [`Mark::side`]
    pub measure: f64,
}

impl Mark {
    /// Points on the face baseline are marked first, with the ruler.
    ///
    /// The other points follow from the angle gauge.
    pub fn is_highlight(&self) -> bool {
        self.face == Face::Line
    }

    /// Label text, far side marks show the near distance as well.
    pub fn label(&self, unit: Unit) -> String {
        let arrow = self.side.arrow();
        let measure = unit.fmt_len(self.measure);
        match self.side {
            Side::Near => format!("{arrow} {measure}"),
            Side::Far => format!(
                "{arrow} {measure} ({} {})",
                Side::Near.arrow(),
                unit.fmt_len(self.pos)
            ),
        }
    }
}

/// Marks of every tail, four for each in [`Span`] order.
pub fn marks(geo: &Geometry) -> Vec<Mark> {
    let tails = &geo.tail_points;
    let len = tails.len();
    tails
        .iter()
        .enumerate()
        .flat_map(|(i, span)| (0..4).map(move |j| (i, j, span)))
        .map(|(i, j, span): (usize, usize, &Span)| {
            let face = if j == 1 || j == 2 { Face::Line } else { Face::Edge };
            // i * 2 + j / 2 < len
            let (side, measure) = if 4 * i + j < 2 * len {
                (Side::Near, span[j])
            } else {
                (Side::Far, tails[len - i - 1][3 - j])
            };
            Mark { tail: i, slot: j, pos: span[j], face, side, measure }
        })
        .collect()
}

/// Marking-out instructions for the angle in degrees.
pub fn instructions(angle: f64) -> [String; 3] {
    [
        "Mark the points on the baseline using the highlighted numbers, \
         measuring from both sides of the board (↑ and ↓) for symmetry."
            .to_string(),
        format!(
            "Mark the points on the end with a bevel gauge or a dovetail marker \
             set to {angle}˚ to get a consistent angle."
        ),
        "Use the remaining numbers to check your layout. \
         (There might be slight differences due to rounding.)"
            .to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solve, JointCfg};
    use approx::assert_abs_diff_eq;

    #[test]
    fn sides() {
        let cfg = JointCfg::new();
        let geo = solve(&cfg);
        let marks = marks(&geo);
        assert_eq!(marks.len(), geo.tail_points.len() * 4);
        // 5 tails: the first two and a half are near
        let near = marks.iter().filter(|m| m.side == Side::Near).count();
        assert_eq!(near, 10);
        let m = &marks[9];
        assert_eq!((m.tail, m.slot, m.side), (2, 1, Side::Near));
        let m = &marks[10];
        assert_eq!((m.tail, m.slot, m.side), (2, 2, Side::Far));
        for m in marks.iter().filter(|m| m.side == Side::Far) {
            assert_abs_diff_eq!(m.measure, cfg.width - m.pos, epsilon = 1e-9);
        }
        assert_eq!(marks.iter().filter(|m| m.is_highlight()).count(), 10);
    }

    #[test]
    fn labels() {
        let m = Mark {
            tail: 4,
            slot: 0,
            pos: 249.7,
            face: Face::Edge,
            side: Side::Far,
            measure: 50.3,
        };
        assert_eq!(m.label(Unit::Metric), "↓ 50 mm (↑ 250 mm)");
        let m = Mark { side: Side::Near, measure: 249.7, ..m };
        assert_eq!(m.label(Unit::Metric), "↑ 250 mm");
        assert!(instructions(10.)[1].contains("10˚"));
    }
}
