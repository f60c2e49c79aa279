use crate::{layout::approx_pin_num, Unit, MAX_PIN_NUM};
use std::ops::RangeInclusive;

/// Range of the board width in the designer.
pub const WIDTH_RANGE: RangeInclusive<f64> = 50.0..=600.;
/// Upper bound of the board thickness, the lower bound is [`Unit::step()`].
pub const THICKNESS_MAX: f64 = 50.;
/// Range of the dovetail angle in degrees.
pub const ANGLE_RANGE: RangeInclusive<f64> = 0.0..=15.;
/// Range of the half-pin to pin ratio.
pub const HALF_PIN_SIZE_RANGE: RangeInclusive<f64> = 0.3..=1.;
/// Range of the tail to pin ratio.
pub const TAIL_TO_PIN_RANGE: RangeInclusive<f64> = 0.7..=3.;
/// Range of the pin density (frequency).
pub const DENSITY_RANGE: RangeInclusive<f64> = 0.1..=1.;
/// Range of the tail variation.
pub const TAIL_VARIATION_RANGE: RangeInclusive<f64> = 1.0..=2.;

/// Joint configuration.
///
/// All lengths share one linear unit (millimeters in the front-end), the
/// angle is in degrees.
///
/// # Parameters
///
/// + Board width `width`
/// + Board thickness `thickness`
/// + Dovetail angle `angle`
/// + Half-pin to pin ratio `half_pin_size`
/// + Tail to pin ratio `tail_to_pin`
/// + Pin density `density`
/// + Tail variation `tail_variation`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct JointCfg {
    /// Length of the board edge being joined
    pub width: f64,
    /// Thickness of the board
    pub thickness: f64,
    /// Half-angle of the dovetail, zero is a box joint
    pub angle: f64,
    /// Width of the half-pins relative to a full pin
    pub half_pin_size: f64,
    /// Width of a tail relative to a pin
    pub tail_to_pin: f64,
    /// Target ratio of pin material, smaller gives fewer and wider pins
    pub density: f64,
    /// Ratio between the widest and the narrowest tail
    pub tail_variation: f64,
}

impl Default for JointCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl JointCfg {
    /// The default joint: a 300 mm wide, 25 mm thick board at 10 degrees.
    pub const fn new() -> Self {
        Self {
            width: 300.,
            thickness: 25.,
            angle: 10.,
            half_pin_size: 0.7,
            tail_to_pin: 1.8,
            density: 0.5,
            tail_variation: 1.3,
        }
    }

    /// A box joint with the same board.
    pub const fn box_joint() -> Self {
        Self { angle: 0., ..Self::new() }
    }

    /// Clamp every field into the designer ranges.
    ///
    /// Non-finite values are left as they are, see [`JointCfg::check()`].
    pub fn clamp(&mut self, unit: Unit) {
        fn clamp(v: &mut f64, range: RangeInclusive<f64>) {
            *v = v.clamp(*range.start(), *range.end());
        }
        clamp(&mut self.width, WIDTH_RANGE);
        clamp(&mut self.thickness, unit.step()..=THICKNESS_MAX);
        clamp(&mut self.angle, ANGLE_RANGE);
        clamp(&mut self.half_pin_size, HALF_PIN_SIZE_RANGE);
        clamp(&mut self.tail_to_pin, TAIL_TO_PIN_RANGE);
        clamp(&mut self.density, DENSITY_RANGE);
        clamp(&mut self.tail_variation, TAIL_VARIATION_RANGE);
    }

    /// Round the board dimensions to the step of the unit.
    ///
    /// Used when switching units so that the values land on the new ruler.
    pub fn snap(&mut self, unit: Unit) {
        let step = unit.step();
        self.width = (self.width / step).round() * step;
        self.thickness = (self.thickness / step).round() * step;
    }

    /// Check the preconditions of the solver.
    ///
    /// The solver itself never fails, this is for the configuration source.
    pub fn check(&self) -> Result<(), CfgError> {
        let fields = [
            ("width", self.width),
            ("thickness", self.thickness),
            ("angle", self.angle),
            ("half_pin_size", self.half_pin_size),
            ("tail_to_pin", self.tail_to_pin),
            ("density", self.density),
            ("tail_variation", self.tail_variation),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CfgError::NotFinite(name));
        }
        if self.width <= 0. {
            Err(CfgError::Width)
        } else if self.thickness < 0. {
            Err(CfgError::Thickness)
        } else if !(0. ..90.).contains(&self.angle) {
            Err(CfgError::Angle)
        } else if self.half_pin_size <= 0. || self.half_pin_size > 1. {
            Err(CfgError::HalfPinSize)
        } else if self.tail_to_pin <= 0. {
            Err(CfgError::TailToPin)
        } else if self.density <= 0. || self.density > 1. {
            Err(CfgError::Density)
        } else if self.tail_variation < 1. {
            Err(CfgError::TailVariation)
        } else if approx_pin_num(self) > MAX_PIN_NUM as f64 {
            Err(CfgError::PinNum)
        } else {
            Ok(())
        }
    }
}

/// Invalid joint configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CfgError {
    /// The field is NaN or infinite
    NotFinite(&'static str),
    /// Width is not positive
    Width,
    /// Thickness is negative
    Thickness,
    /// Angle is outside of `[0, 90)`
    Angle,
    /// Half-pin size is outside of `(0, 1]`
    HalfPinSize,
    /// Tail to pin ratio is not positive
    TailToPin,
    /// Density is outside of `(0, 1]`
    Density,
    /// Tail variation is less than one
    TailVariation,
    /// The board holds more than [`MAX_PIN_NUM`] full pins
    PinNum,
}

impl std::fmt::Display for CfgError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFinite(name) => write!(f, "{name} must be a finite number"),
            Self::Width => write!(f, "width must be positive"),
            Self::Thickness => write!(f, "thickness must not be negative"),
            Self::Angle => write!(f, "angle must be in [0, 90) degrees"),
            Self::HalfPinSize => write!(f, "half-pin size must be in (0, 1]"),
            Self::TailToPin => write!(f, "tail to pin ratio must be positive"),
            Self::Density => write!(f, "density must be in (0, 1]"),
            Self::TailVariation => write!(f, "tail variation must be at least 1"),
            Self::PinNum => write!(f, "the board fits more than {MAX_PIN_NUM} pins"),
        }
    }
}

impl std::error::Error for CfgError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_to_designer() {
        let mut cfg = JointCfg {
            width: 1000.,
            thickness: 1.,
            angle: 40.,
            half_pin_size: 0.1,
            tail_to_pin: 5.,
            density: 0.,
            tail_variation: 0.5,
        };
        cfg.clamp(Unit::Imperial);
        let expected = JointCfg {
            width: 600.,
            thickness: 6.25,
            angle: 15.,
            half_pin_size: 0.3,
            tail_to_pin: 3.,
            density: 0.1,
            tail_variation: 1.,
        };
        assert_eq!(cfg, expected);
        assert_eq!(cfg.check(), Ok(()));
    }

    #[test]
    fn snap_to_unit() {
        let mut cfg = JointCfg::new();
        cfg.snap(Unit::Imperial);
        // 300 / 6.25 = 48, 25 / 6.25 = 4
        assert_eq!(cfg.width, 300.);
        assert_eq!(cfg.thickness, 25.);
        cfg.width = 305.;
        cfg.thickness = 20.;
        cfg.snap(Unit::Imperial);
        assert_eq!(cfg.width, 306.25);
        assert_eq!(cfg.thickness, 18.75);
        cfg.snap(Unit::Metric);
        assert_eq!(cfg.width, 305.);
        assert_eq!(cfg.thickness, 20.);
    }

    #[test]
    fn check_rejects() {
        let cases = [
            (JointCfg { width: 0., ..JointCfg::new() }, CfgError::Width),
            (JointCfg { thickness: -1., ..JointCfg::new() }, CfgError::Thickness),
            (JointCfg { angle: 90., ..JointCfg::new() }, CfgError::Angle),
            (JointCfg { half_pin_size: 1.5, ..JointCfg::new() }, CfgError::HalfPinSize),
            (JointCfg { tail_to_pin: 0., ..JointCfg::new() }, CfgError::TailToPin),
            (JointCfg { density: 0., ..JointCfg::new() }, CfgError::Density),
            (JointCfg { tail_variation: 0.9, ..JointCfg::new() }, CfgError::TailVariation),
            (JointCfg { angle: f64::NAN, ..JointCfg::new() }, CfgError::NotFinite("angle")),
            (JointCfg { width: 1e30, ..JointCfg::new() }, CfgError::PinNum),
        ];
        for (cfg, err) in cases {
            assert_eq!(cfg.check(), Err(err));
        }
        assert_eq!(JointCfg::new().check(), Ok(()));
        assert_eq!(JointCfg::box_joint().check(), Ok(()));
        // Ten meters of board is still a joint
        assert_eq!(JointCfg { width: 1e4, ..JointCfg::new() }.check(), Ok(()));
    }
}
