//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::directory::DuplicatePolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contacts per page for `pages` without an explicit size (default: 5)
    pub page_size: usize,

    /// How to treat a contact added under an existing name (default: overwrite)
    pub duplicate_policy: DuplicatePolicy,

    /// Maximum number of "did you mean" suggestions on a lookup miss (default: 3)
    pub max_suggestions: usize,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PAGE_SIZE`: Contacts per page (default: 5, must be at least 1)
    /// - `CONTACT_BOOK_DUPLICATE_POLICY`: `overwrite` or `reject` (default: overwrite)
    /// - `CONTACT_BOOK_SUGGESTIONS`: Max lookup suggestions (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", 5)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let duplicate_policy = match env::var("CONTACT_BOOK_DUPLICATE_POLICY") {
            Ok(val) => val
                .parse::<DuplicatePolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_DUPLICATE_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => DuplicatePolicy::default(),
        };

        let max_suggestions = Self::parse_env_usize("CONTACT_BOOK_SUGGESTIONS", 3)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            page_size,
            duplicate_policy,
            max_suggestions,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
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
            page_size: 5,
            duplicate_policy: DuplicatePolicy::Overwrite,
            max_suggestions: 3,
            log_level: "warn".to_string(),
        }
    }
}
