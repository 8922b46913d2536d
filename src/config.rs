//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any purchase
//! is processed.
//!
//! ## Variables
//!
//! - `RUST_LOG` - Log level filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Result, bail};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_FORMAT` is set to an unknown value.
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        if log_format != "text" && log_format != "json" {
            bail!("LOG_FORMAT must be 'text' or 'json', got '{log_format}'");
        }

        Ok(Self {
            log_level,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Environment mutation is process-global, so only exercise the
        // default path when the variables are absent.
        if env::var("RUST_LOG").is_err() && env::var("LOG_FORMAT").is_err() {
            let config = Config::from_env().unwrap();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.log_format, "text");
        }
    }
}
