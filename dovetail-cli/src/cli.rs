use std::path::PathBuf;

mod export;
mod joint;
mod logger;
mod mark;
mod solve;

const APP_NAME: &str = env!("CARGO_BIN_NAME");

type AnyResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(clap::Parser)]
#[clap(name = APP_NAME, version, author, about)]
pub(crate) struct Entry {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(clap::Subcommand)]
enum Cmd {
    /// Print the pin and tail layout
    Solve(solve::SolveCfg),
    /// Print the marking-out steps and plot the marking diagram
    Mark(mark::MarkCfg),
    /// Export the pin and tail coordinates as CSV
    Csv(export::CsvCfg),
    /// Write the default joint configuration (in RON format)
    Cfg {
        /// Output path, default to print
        file: Option<PathBuf>,
    },
}

impl Entry {
    pub(crate) fn main() {
        let entry = <Self as clap::Parser>::parse_from(wild::args());
        register_panic_hook();
        let res = match entry.cmd {
            Cmd::Solve(cfg) => solve::solve(cfg),
            Cmd::Mark(cfg) => mark::mark(cfg),
            Cmd::Csv(cfg) => export::csv(cfg),
            Cmd::Cfg { file } => export::cfg(file),
        };
        if let Err(e) = res {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn register_panic_hook() {
    // Print panic messages without stack trace
    std::panic::set_hook(Box::new(|info| {
        match info.payload().downcast_ref::<&str>() {
            Some(s) => eprintln!("{s}"),
            None => eprintln!("{info}"),
        }
        std::process::exit(1);
    }));
}
