use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use log::debug;
use playlist_analyzer::cli::Cli;
use playlist_analyzer::{loader, report};

const EXIT_USAGE: u8 = 1;
const EXIT_LOAD: u8 = 2;
const EXIT_WRITE: u8 = 3;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                return ExitCode::from(EXIT_USAGE);
            }
        },
    };

    // -v flags win over RUST_LOG
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose > 0 {
        logger.filter_level(cli.log_level());
    }
    logger.init();

    debug!("Reading {:?}, writing {:?}", cli.playlist, cli.report);

    let songs = match loader::load(&cli.playlist) {
        Ok(songs) => songs,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_LOAD);
        }
    };

    let text = report::generate(&songs);

    if let Err(e) = report::save(&cli.report, &text) {
        eprintln!("{}", e);
        return ExitCode::from(EXIT_WRITE);
    }

    ExitCode::SUCCESS
}
