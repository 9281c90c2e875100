//! Kiosk configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Logging is configured separately through `RUST_LOG`.

use std::env;

/// Default prompt printed before each command.
pub const DEFAULT_PROMPT: &str = "cmd> ";

/// Default maximum number of characters kept from one command line.
pub const DEFAULT_MAX_LINE_CHARS: usize = 100;

/// Kiosk configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    /// Prompt printed before each read (`KIOSK_PROMPT`)
    pub prompt: String,

    /// Characters kept from each command line (`KIOSK_MAX_LINE`)
    pub max_line_chars: usize,
}

impl Default for KioskConfig {
    fn default() -> Self {
        KioskConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            max_line_chars: DEFAULT_MAX_LINE_CHARS,
        }
    }
}

impl KioskConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prompt = lookup("KIOSK_PROMPT").unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        let max_line_chars = match lookup("KIOSK_MAX_LINE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| ConfigError::InvalidValue("KIOSK_MAX_LINE".to_string()))?,
            None => DEFAULT_MAX_LINE_CHARS,
        };

        Ok(KioskConfig {
            prompt,
            max_line_chars,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<KioskConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        KioskConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), KioskConfig::default());
        assert_eq!(KioskConfig::default().prompt, "cmd> ");
        assert_eq!(KioskConfig::default().max_line_chars, 100);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("KIOSK_PROMPT", "> "), ("KIOSK_MAX_LINE", "40")]).unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.max_line_chars, 40);
    }

    #[test]
    fn test_invalid_max_line() {
        for bad in ["0", "-3", "lots", ""] {
            let err = config_from(&[("KIOSK_MAX_LINE", bad)]).unwrap_err();
            assert_eq!(err.to_string(), "Invalid value for KIOSK_MAX_LINE");
        }
    }
}
