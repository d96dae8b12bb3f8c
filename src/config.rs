//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file. Nothing here writes to stdout,
//! which belongs to the conversation.

use crate::directory::DEFAULT_LOOKAHEAD_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Longest accepted lookahead window.
const MAX_LOOKAHEAD_DAYS: u32 = 366;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Window in days for the `birthdays` command (default: 7)
    pub lookahead_days: u32,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_LOOKAHEAD_DAYS`: default `birthdays` window (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let lookahead_days =
            Self::parse_env_u32("BIRTHDAY_LOOKAHEAD_DAYS", DEFAULT_LOOKAHEAD_DAYS)?;
        if lookahead_days == 0 || lookahead_days > MAX_LOOKAHEAD_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_LOOKAHEAD_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_LOOKAHEAD_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            lookahead_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
