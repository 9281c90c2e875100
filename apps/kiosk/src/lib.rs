//! # Kiosk Application Library
//!
//! The I/O side of the kiosk: menu files in, terminal session out.
//!
//! ## Module Organization
//! ```text
//! kiosk/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── main.rs         ◄─── Binary entry point, exit codes
//! ├── cli.rs          ◄─── clap argument definition
//! ├── config.rs       ◄─── Environment configuration
//! ├── input.rs        ◄─── LineReader
//! ├── loader.rs       ◄─── Menu file loading
//! ├── session.rs      ◄─── Interactive loop
//! └── error.rs        ◄─── KioskError
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod session;

use std::io;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::KioskConfig;
pub use error::KioskError;
pub use session::{Session, SessionEnd};

/// Runs the kiosk on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Kiosk Startup                                     │
/// │                                                                         │
/// │  1. Load Menu ────────────────────────────────────────────────────────► │
/// │     • Every file, in argument order                                     │
/// │     • First bad file aborts with its diagnostic                         │
/// │                                                                         │
/// │  2. Start Session ────────────────────────────────────────────────────► │
/// │     • Empty order                                                       │
/// │     • Locked stdin / stdout                                             │
/// │                                                                         │
/// │  3. Loop until quit or end of input                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run<P: AsRef<Path>>(menu_files: &[P], config: &KioskConfig) -> Result<SessionEnd, KioskError> {
    let menu = loader::load_menu(menu_files)?;
    info!(files = menu_files.len(), items = menu.len(), "Menu loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&menu, stdin.lock(), stdout.lock(), config);
    let end = session.run()?;

    info!(?end, items = session.order().len(), "Session finished");
    Ok(end)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show loaded files and every dispatched command
/// - Default: WARN level
///
/// Logs go to stderr; stdout carries only the session transcript.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
