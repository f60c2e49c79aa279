use super::{joint::JointArgs, logger::Logger, AnyResult};
use dovetail::{describe_angle, JointCfg, Layout};
use std::io::Write;

#[derive(clap::Args)]
pub(super) struct SolveCfg {
    #[clap(flatten)]
    joint: JointArgs,
    /// Print the raw numbers instead of the ruler values
    #[clap(long)]
    precise: bool,
}

pub(super) fn solve(cfg: SolveCfg) -> AnyResult {
    let SolveCfg { joint, precise } = cfg;
    let cfg = joint.load()?;
    let mut stdout = std::io::stdout().lock();
    let mut logger = Logger::new(&mut stdout, joint.unit).precise(precise);
    report(&mut logger, &cfg)?;
    logger.flush()?;
    Ok(())
}

pub(super) fn report<W: Write>(logger: &mut Logger<W>, cfg: &JointCfg) -> std::io::Result<()> {
    let layout = Layout::new(cfg);
    let geo = layout.geometry();
    logger.top_title("config")?;
    logger.record(cfg)?;
    logger.title("layout")?;
    logger.log("slope", describe_angle(cfg.angle))?;
    logger.len("pin_narrowing", layout.pin_narrowing)?;
    logger.log("pin_num", layout.pin_num)?;
    logger.len("pin_width", layout.pin_width)?;
    logger.len("half_pin_width", layout.half_pin_width)?;
    logger.lens("tail_widths", &layout.tail_widths)?;
    logger.title("pins")?;
    logger.spans(&geo.pin_points)?;
    logger.title("tails")?;
    logger.spans(&geo.tail_points)
}
