//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Interactive menu ordering kiosk.
///
/// Loads every menu file, then reads commands from stdin:
/// `list menu`, `list category <name>`, `list order`,
/// `add <id> <qty>`, `remove <id> <qty>`, `quit`.
#[derive(Debug, Parser)]
#[command(name = "kiosk", version)]
pub struct Cli {
    /// Menu files to load, in order
    #[arg(value_name = "MENU_FILE", required = true)]
    pub menu_files: Vec<PathBuf>,
}
