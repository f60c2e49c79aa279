/// Millimeters in a nominal inch.
///
/// The imperial ruler rounds an inch to 25 mm so that the metric and the
/// imperial steps stay on the same grid.
pub const NOMINAL_INCH: f64 = 25.;
/// Imperial lengths are rounded to this fraction of an inch.
pub const INCH_DIVISION: i64 = 16;

/// Unit system used to present lengths.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Unit {
    /// Millimeters
    #[default]
    Metric,
    /// Inches in sixteenths
    Imperial,
}

impl Unit {
    /// Get the unit names.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Step of the board dimensions in millimeters.
    pub const fn step(&self) -> f64 {
        match self {
            Self::Metric => 5.,
            // A quarter inch
            Self::Imperial => 6.25,
        }
    }

    /// Format a length given in millimeters.
    ///
    /// ```
    /// use dovetail::Unit;
    /// assert_eq!(Unit::Metric.fmt_len(12.6), "13 mm");
    /// assert_eq!(Unit::Imperial.fmt_len(29.7), "1 3/16″");
    /// ```
    pub fn fmt_len(&self, v: f64) -> String {
        match self {
            Self::Metric => format!("{} mm", v.round() as i64),
            Self::Imperial => {
                let n = (INCH_DIVISION as f64 * v / NOMINAL_INCH).round() as i64;
                format!("{}″", fmt_fraction(n, INCH_DIVISION))
            }
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mixed fraction in lowest terms, e.g. `1 3/16`.
fn fmt_fraction(n: i64, d: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let n = n.abs();
    let (whole, rem) = (n / d, n % d);
    if rem == 0 {
        return format!("{sign}{whole}");
    }
    let g = gcd(rem, d);
    let (rem, d) = (rem / g, d / g);
    if whole == 0 {
        format!("{sign}{rem}/{d}")
    } else {
        format!("{sign}{whole} {rem}/{d}")
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Describe the dovetail angle in degrees with its slope ratio.
///
/// ```
/// use dovetail::describe_angle;
/// assert_eq!(describe_angle(0.), "0˚ (box joint)");
/// assert_eq!(describe_angle(10.), "10˚ (≈1:6)");
/// ```
pub fn describe_angle(angle: f64) -> String {
    if angle == 0. {
        format!("{angle}˚ (box joint)")
    } else {
        let ratio = angle.to_radians().tan().recip().round();
        format!("{angle}˚ (≈1:{ratio})")
    }
}

/// Format a ratio as a percentage.
pub fn fmt_percent(v: f64) -> String {
    format!("{}%", (v * 100.).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric() {
        assert_eq!(Unit::Metric.fmt_len(0.), "0 mm");
        assert_eq!(Unit::Metric.fmt_len(-0.2), "0 mm");
        assert_eq!(Unit::Metric.fmt_len(299.5), "300 mm");
    }

    #[test]
    fn imperial() {
        assert_eq!(Unit::Imperial.fmt_len(0.), "0″");
        assert_eq!(Unit::Imperial.fmt_len(300.), "12″");
        assert_eq!(Unit::Imperial.fmt_len(12.5), "1/2″");
        assert_eq!(Unit::Imperial.fmt_len(26.5625), "1 1/16″");
        assert_eq!(Unit::Imperial.fmt_len(37.5), "1 1/2″");
        assert_eq!(Unit::Imperial.fmt_len(-6.25), "-1/4″");
    }

    #[test]
    fn angle_and_ratio() {
        assert_eq!(describe_angle(15.), "15˚ (≈1:4)");
        assert_eq!(describe_angle(7.5), "7.5˚ (≈1:8)");
        assert_eq!(fmt_percent(0.7), "70%");
        assert_eq!(fmt_percent(1.8), "180%");
    }
}
