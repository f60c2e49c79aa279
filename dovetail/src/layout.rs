use crate::JointCfg;

/// The narrowest pin that can still be marked and sawn, at its cut face.
pub const MIN_PIN_WIDTH: f64 = 3.;

/// Marking coordinates of a pin or a tail along the board width.
///
/// In order: left bottom, left top, right top, right bottom.
pub type Span = [f64; 4];

/// The most full pins a joint may have to pass [`JointCfg::check()`].
///
/// No hand-cut board comes near it, the pin and tail buffers of
/// [`solve()`] are sized by the pin count.
pub const MAX_PIN_NUM: usize = 10_000;

/// Pin and tail marking coordinates.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Geometry {
    /// Pins from left to right, both half-pins included
    pub pin_points: Vec<Span>,
    /// Tails from left to right, one less than the pins
    pub tail_points: Vec<Span>,
}

/// Solve the joint layout.
///
/// This is a shortcut of [`Layout::new()`] and [`Layout::geometry()`].
///
/// # Preconditions
///
/// The configuration should satisfy [`JointCfg::check()`]. Nothing is
/// validated here: out of range input gives degenerate (overlapping or
/// inverted) spans instead of an error, and so does a board too narrow to
/// hold both half-pins.
pub fn solve(cfg: &JointCfg) -> Geometry {
    Layout::new(cfg).geometry()
}

/// Solved sizes of the joint before they are turned into coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Board width
    pub width: f64,
    /// Offset of the marking lines caused by the angle through the thickness
    pub pin_narrowing: f64,
    /// Number of full pins, the half-pins are not counted
    pub pin_num: usize,
    /// Width of a full pin
    pub pin_width: f64,
    /// Width of the half-pins on both ends
    pub half_pin_width: f64,
    /// Width of each tail from left to right
    pub tail_widths: Vec<f64>,
}

impl Layout {
    /// Solve the pin sizes and the tail taper.
    pub fn new(cfg: &JointCfg) -> Self {
        let JointCfg { width, thickness, angle, half_pin_size, tail_to_pin, tail_variation, .. } =
            *cfg;
        let pin_narrowing = pin_narrowing(thickness, angle);
        let pin_num = approx_pin_num(cfg) as usize;
        // pin * (half_pin * 2 + n * (1 + tail_to_pin) + tail_to_pin) = width
        let pin_width =
            width / (half_pin_size * 2. + pin_num as f64 * (1. + tail_to_pin) + tail_to_pin);
        let tail_widths = tail_widths(pin_num + 1, pin_width * tail_to_pin, tail_variation);
        Self {
            width,
            pin_narrowing,
            pin_num,
            pin_width,
            half_pin_width: pin_width * half_pin_size,
            tail_widths,
        }
    }

    /// Turn the sizes into marking coordinates.
    pub fn geometry(&self) -> Geometry {
        let Self { width, pin_narrowing: pn, pin_width, half_pin_width: hp, .. } = *self;
        let mut pin_points = Vec::with_capacity(self.pin_num + 2);
        pin_points.push([0., 0., hp - pn, hp + pn]);
        let mut offset = hp;
        for tail in &self.tail_widths[..self.pin_num] {
            let left = offset + tail;
            let right = left + pin_width;
            pin_points.push([left - pn, left + pn, right - pn, right + pn]);
            offset = right;
        }
        pin_points.push([width - hp - pn, width - hp + pn, width, width]);
        let tail_points = pin_points
            .windows(2)
            .map(|w| {
                let [[.., rt, rb], [lb, lt, ..]] = [w[0], w[1]];
                [rt, rb, lb, lt]
            })
            .collect();
        Geometry { pin_points, tail_points }
    }
}

/// Widths of `num` tails with the average width `avg`.
///
/// The widths form an arithmetic progression mirrored about the middle,
/// from `base` at both ends to `variation * base` in the middle, and their
/// mean is always `avg`.
fn pin_narrowing(thickness: f64, angle: f64) -> f64 {
    thickness * angle.to_radians().tan() / 2.
}

// Whole number of full pins, before the cast
pub(crate) fn approx_pin_num(cfg: &JointCfg) -> f64 {
    let JointCfg { width, thickness, angle, half_pin_size, tail_to_pin, density, .. } = *cfg;
    let pin_narrowing = pin_narrowing(thickness, angle);
    // pin * (1 + tail_to_pin) = thickness / density
    let approx_pin_width = (thickness / density / (1. + tail_to_pin))
        .max(MIN_PIN_WIDTH + pin_narrowing * 2.)
        .max((MIN_PIN_WIDTH + pin_narrowing) / half_pin_size);
    // n * pin * (1 + tail_to_pin) + pin * half_pin * 2 + pin * tail_to_pin <= width
    ((width - approx_pin_width * (half_pin_size * 2. + tail_to_pin))
        / approx_pin_width
        / (1. + tail_to_pin))
        .floor()
        .max(0.)
}

fn tail_widths(num: usize, avg: f64, variation: f64) -> Vec<f64> {
    let m = num.div_ceil(2);
    if m < 2 {
        return vec![avg; num];
    }
    let mf = m as f64;
    let base = if num % 2 == 1 {
        avg * (2. * mf - 1.) / ((variation + 1.) * (mf - 1.) + 1.)
    } else {
        avg * 2. / (variation + 1.)
    };
    let delta = base * (variation - 1.) / (mf - 1.);
    let n = num - 1;
    (0..num)
        .map(|i| base + delta * i.min(n - i) as f64)
        .collect()
}
