use super::{joint::JointArgs, AnyResult};
use dovetail::{csv::dump_csv, solve, JointCfg};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct CsvCfg {
    #[clap(flatten)]
    joint: JointArgs,
    /// Output path, default to print
    #[clap(short, long)]
    out: Option<PathBuf>,
}

pub(super) fn csv(cfg: CsvCfg) -> AnyResult {
    let CsvCfg { joint, out } = cfg;
    let geo = solve(&joint.load()?);
    write_or_print(out, &dump_csv(&geo)?)
}

pub(super) fn cfg(file: Option<PathBuf>) -> AnyResult {
    write_or_print(file, &dump_cfg(&JointCfg::new())?)
}

fn dump_cfg(cfg: &JointCfg) -> Result<String, ron::Error> {
    ron::ser::to_string_pretty(cfg, ron::ser::PrettyConfig::new())
}

fn write_or_print(file: Option<PathBuf>, s: &str) -> AnyResult {
    match file {
        Some(path) => {
            std::fs::write(&path, s)?;
            println!("Saved to: {}", path.display());
        }
        None => print!("{s}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cfg_back_and_forth() {
        let cfg = JointCfg { angle: 7.5, ..JointCfg::new() };
        let s = dump_cfg(&cfg).unwrap();
        assert!(s.contains("tail_variation: 1.3"));
        assert_eq!(ron::from_str::<JointCfg>(&s).unwrap(), cfg);
    }

    #[test]
    fn save_file() {
        let path = std::env::temp_dir().join(format!("dovetail-{}.csv", std::process::id()));
        let s = dump_csv(&solve(&JointCfg::new())).unwrap();
        write_or_print(Some(path.clone()), &s).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(saved, s);
        assert!(saved.starts_with("kind,index,"));
    }
}
