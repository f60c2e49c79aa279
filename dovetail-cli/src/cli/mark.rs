use super::{joint::JointArgs, logger::Logger, AnyResult};
use dovetail::{
    marking::{self, Face},
    plot, solve, JointCfg,
};
use std::{io::Write, path::PathBuf};

#[derive(clap::Args)]
pub(super) struct MarkCfg {
    #[clap(flatten)]
    joint: JointArgs,
    /// Output path of the marking diagram (in SVG format)
    #[clap(short, long, default_value = "dovetail.svg")]
    out: PathBuf,
    /// Height of the diagram in pixels
    #[clap(long, default_value_t = 800)]
    height: u32,
    /// Font size of the labels
    #[clap(long, default_value_t = 12.)]
    font: f64,
}

pub(super) fn mark(cfg: MarkCfg) -> AnyResult {
    let MarkCfg { joint, mut out, height, font } = cfg;
    let cfg = joint.load()?;
    let geo = solve(&cfg);
    {
        let mut stdout = std::io::stdout().lock();
        let mut logger = Logger::new(&mut stdout, joint.unit);
        steps(&mut logger, &cfg, &geo)?;
        logger.flush()?;
    }
    if out.extension().and_then(std::ffi::OsStr::to_str) != Some("svg") {
        out.set_extension("svg");
    }
    let svg = plot::SVGBackend::new(&out, size(&cfg, height));
    plot::Diagram::new(&cfg, &geo)
        .unit(joint.unit)
        .font(font)
        .plot(svg)?;
    println!("Diagram saved to: {}", out.display());
    Ok(())
}

// Keep the aspect ratio of the board end with the label space
fn size(cfg: &JointCfg, height: u32) -> (u32, u32) {
    let w = cfg.thickness + 200.;
    let h = cfg.width + 20.;
    let width = (height as f64 * w / h).round() as u32;
    (width.max(height / 4), height)
}

fn steps<W: Write>(
    logger: &mut Logger<W>,
    cfg: &JointCfg,
    geo: &dovetail::Geometry,
) -> std::io::Result<()> {
    logger.top_title("steps")?;
    for (i, step) in marking::instructions(cfg.angle).iter().enumerate() {
        logger.log((i + 1).to_string(), step)?;
    }
    logger.title("marks")?;
    for m in marking::marks(geo) {
        let face = match m.face {
            Face::Line => "line",
            Face::Edge => "edge",
        };
        let star = if m.is_highlight() { " *" } else { "" };
        let label = m.label(logger.unit());
        logger.log(format!("{}.{}", m.tail, m.slot), format_args!("{face} {label}{star}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dovetail::Unit;

    #[test]
    fn diagram_size() {
        let cfg = JointCfg::new();
        assert_eq!(size(&cfg, 800), (563, 800));
        let cfg = JointCfg { width: 50., thickness: 50., ..cfg };
        assert_eq!(size(&cfg, 700), (2500, 700));
    }

    #[test]
    fn mark_table() {
        let cfg = JointCfg::new();
        let geo = solve(&cfg);
        let mut buf = Vec::new();
        steps(&mut Logger::new(&mut buf, Unit::Metric), &cfg, &geo).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("[steps]\n1=Mark the points"));
        assert!(s.contains("\n[marks]\n0.0=edge ↑ 12 mm\n0.1=line ↑ 17 mm *\n"));
        assert!(s.contains("4.3=edge ↓ 12 mm (↑ 288 mm)\n"));
    }
}
