// Clap definitions in derive style

use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "playlist_analyzer", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Tab-separated playlist export, header on the first line
    #[arg(value_name = "MUSIC_PLAYLIST_FILE")]
    pub playlist: PathBuf,

    /// Where the report is written (overwritten if present)
    #[arg(value_name = "REPORT_FILE")]
    pub report: PathBuf,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
