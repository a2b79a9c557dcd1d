//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::book::DuplicatePolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// How records with an already stored name are handled (default: overwrite)
    pub duplicate_policy: DuplicatePolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ADDRESS_BOOK_DUPLICATE_POLICY`: `overwrite` or `reject` (default: "overwrite")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let duplicate_policy = Self::parse_duplicate_policy("ADDRESS_BOOK_DUPLICATE_POLICY")?;

        Ok(Config {
            log_level,
            duplicate_policy,
        })
    }

    /// Parse an environment variable as a duplicate policy, defaulting to overwrite.
    fn parse_duplicate_policy(var_name: &str) -> ConfigResult<DuplicatePolicy> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<DuplicatePolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason,
                }),
            Err(_) => Ok(DuplicatePolicy::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            duplicate_policy: DuplicatePolicy::Overwrite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Overwrite);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");
        guard.set("ADDRESS_BOOK_DUPLICATE_POLICY", "reject");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    #[serial]
    fn test_config_invalid_duplicate_policy() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "info");
        guard.set("ADDRESS_BOOK_DUPLICATE_POLICY", "merge");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "ADDRESS_BOOK_DUPLICATE_POLICY");
                assert!(reason.contains("merge"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "LOG_LEVEL");
        }
    }

    #[test]
    #[serial]
    fn test_parse_duplicate_policy_default() {
        env::remove_var("TEST_DUPLICATE_POLICY");
        let result = Config::parse_duplicate_policy("TEST_DUPLICATE_POLICY");
        assert_eq!(result.unwrap(), DuplicatePolicy::Overwrite);
    }
}
