use dovetail::{CfgError, JointCfg, Unit};
use std::{ffi::OsStr, path::PathBuf};

pub(super) enum LoadErr {
    // Unsupported format
    Format,
    // Reading file error
    Io(std::io::Error),
    // Deserialization error
    RonSer(ron::error::SpannedError),
    // Invalid joint
    Joint(CfgError),
}

impl std::fmt::Display for LoadErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Format => write!(f, "unsupported format, expect a .ron file"),
            Self::Io(e) => write!(f, "reading file error: {e}"),
            Self::RonSer(e) => write!(f, "ron deserialization error: {e}"),
            Self::Joint(e) => write!(f, "invalid joint: {e}"),
        }
    }
}

impl std::fmt::Debug for LoadErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for LoadErr {}

/// The joint options shared by the subcommands.
#[derive(clap::Args)]
pub(super) struct JointArgs {
    /// Load the joint from a RON file, default to the example joint
    #[clap(long)]
    cfg: Option<PathBuf>,
    /// Board width (mm)
    #[clap(long)]
    width: Option<f64>,
    /// Board thickness (mm)
    #[clap(long)]
    thickness: Option<f64>,
    /// Dovetail angle (degrees), zero for a box joint
    #[clap(long)]
    angle: Option<f64>,
    /// Half-pin to pin ratio
    #[clap(long)]
    half_pin_size: Option<f64>,
    /// Tail to pin ratio
    #[clap(long)]
    tail_to_pin: Option<f64>,
    /// Frequency of the pins, smaller gives fewer and wider pins
    #[clap(long)]
    density: Option<f64>,
    /// Ratio between the widest and the narrowest tail
    #[clap(long)]
    tail_variation: Option<f64>,
    /// Unit of the printed lengths
    #[clap(short, long, value_enum, default_value_t)]
    pub(super) unit: Unit,
    /// Round the board dimensions to the ruler of the unit
    #[clap(long)]
    snap: bool,
    /// Keep the values outside of the designer ranges
    #[clap(long)]
    raw: bool,
    /// Reject the joint instead of solving a degenerate layout
    #[clap(long)]
    check: bool,
}

impl JointArgs {
    /// Load the file, then apply the overrides, snapping and clamping.
    pub(super) fn load(&self) -> Result<JointCfg, LoadErr> {
        let mut cfg = match &self.cfg {
            Some(path) => read_cfg(path)?,
            None => JointCfg::new(),
        };
        let overrides = [
            (&mut cfg.width, self.width),
            (&mut cfg.thickness, self.thickness),
            (&mut cfg.angle, self.angle),
            (&mut cfg.half_pin_size, self.half_pin_size),
            (&mut cfg.tail_to_pin, self.tail_to_pin),
            (&mut cfg.density, self.density),
            (&mut cfg.tail_variation, self.tail_variation),
        ];
        for (field, v) in overrides {
            if let Some(v) = v {
                *field = v;
            }
        }
        if self.snap {
            cfg.snap(self.unit);
        }
        if !self.raw {
            cfg.clamp(self.unit);
        }
        if self.check {
            cfg.check().map_err(LoadErr::Joint)?;
        }
        Ok(cfg)
    }
}

fn read_cfg(path: &std::path::Path) -> Result<JointCfg, LoadErr> {
    match path.extension().and_then(OsStr::to_str) {
        Some("ron") => std::fs::read_to_string(path)
            .map_err(LoadErr::Io)
            .and_then(|s| ron::from_str(&s).map_err(LoadErr::RonSer)),
        _ => Err(LoadErr::Format),
    }
}
