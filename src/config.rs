//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Maximum number of name search results to return (default: 5)
    pub max_match_results: usize,

    /// Name search confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `MAX_MATCH_RESULTS`: Max name search results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let defaults = Self::default();

        let max_match_results =
            Self::parse_env_usize("MAX_MATCH_RESULTS", defaults.max_match_results)?;
        let match_confidence_threshold = Self::parse_env_u8(
            "MATCH_CONFIDENCE_THRESHOLD",
            defaults.match_confidence_threshold,
        )?;

        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            log_level,
            max_match_results,
            match_confidence_threshold,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            max_match_results: 5,
            match_confidence_threshold: 30,
        }
    }
}
