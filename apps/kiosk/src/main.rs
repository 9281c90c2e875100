//! # Kiosk
//!
//! ```bash
//! kiosk drinks.txt snacks.txt
//! ```
//!
//! Exit status is success after `quit` or end of input, failure for bad
//! arguments, bad configuration, or any menu file problem.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use kiosk::cli::Cli;
use kiosk::KioskConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    kiosk::init_tracing();

    let result = KioskConfig::load()
        .map_err(kiosk::KioskError::from)
        .and_then(|config| kiosk::run(&cli.menu_files, &config));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "Kiosk stopped");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
