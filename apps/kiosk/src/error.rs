//! # Kiosk Error Type
//!
//! Everything that stops the program before or during a session.
//!
//! Bad user commands never get here; they print `Invalid command` and the
//! session keeps going.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::loader::MenuLoadError;

/// Fatal kiosk errors.
#[derive(Debug, Error)]
pub enum KioskError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    MenuLoad(#[from] MenuLoadError),

    /// stdin or stdout failed mid-session.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_menu_load_message_passes_through() {
        let err: KioskError = MenuLoadError::Open {
            path: PathBuf::from("menu.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert_eq!(err.to_string(), "Can't open file: menu.txt");
    }

    #[test]
    fn test_config_message_passes_through() {
        let err: KioskError = ConfigError::InvalidValue("KIOSK_MAX_LINE".to_string()).into();
        assert_eq!(err.to_string(), "Invalid value for KIOSK_MAX_LINE");
    }
}
