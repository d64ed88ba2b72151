//! Environment-driven configuration.

use thiserror::Error;

use crate::generator::DEFAULT_GENERATED_LENGTH;

/// Environment variable holding the default generated password length.
pub const LENGTH_ENV: &str = "PWD_METER_LENGTH";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PWD_METER_LENGTH must be a positive integer, got {0:?}")]
    InvalidLength(String),
}

/// Returns the length used for generated passwords.
///
/// Priority:
/// 1. Environment variable `PWD_METER_LENGTH`
/// 2. [`DEFAULT_GENERATED_LENGTH`] (14)
pub fn generated_length() -> Result<usize, ConfigError> {
    match std::env::var(LENGTH_ENV) {
        Ok(raw) => parse_length(&raw),
        Err(_) => Ok(DEFAULT_GENERATED_LENGTH),
    }
}

/// Parses a generated-length value. Zero is rejected.
pub fn parse_length(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(length) if length > 0 => Ok(length),
        _ => Err(ConfigError::InvalidLength(raw.to_string())),
    }
}
