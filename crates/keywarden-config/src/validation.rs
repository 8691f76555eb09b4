// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as the exposure window staying within sane bounds and
//! the generator having at least one character class.

use crate::diagnostic::ConfigError;
use crate::model::KeywardenConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

const MIN_CLEAR_AFTER_SECS: u32 = 1;
const MAX_CLEAR_AFTER_SECS: u32 = 3600;

const MIN_GENERATOR_LENGTH: usize = 6;
const MAX_GENERATOR_LENGTH: usize = 128;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &KeywardenConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.client.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "client.log_level `{}` is not one of {}",
                config.client.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let clear_after = config.clipboard.clear_after_secs;
    if !(MIN_CLEAR_AFTER_SECS..=MAX_CLEAR_AFTER_SECS).contains(&clear_after) {
        errors.push(ConfigError::Validation {
            message: format!(
                "clipboard.clear_after_secs must be between {MIN_CLEAR_AFTER_SECS} and {MAX_CLEAR_AFTER_SECS}, got {clear_after}"
            ),
        });
    }

    let length = config.generator.length;
    if !(MIN_GENERATOR_LENGTH..=MAX_GENERATOR_LENGTH).contains(&length) {
        errors.push(ConfigError::Validation {
            message: format!(
                "generator.length must be between {MIN_GENERATOR_LENGTH} and {MAX_GENERATOR_LENGTH}, got {length}"
            ),
        });
    }

    let generator = &config.generator;
    if !(generator.uppercase || generator.lowercase || generator.digits || generator.symbols) {
        errors.push(ConfigError::Validation {
            message: "generator must enable at least one character class".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = KeywardenConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_clear_after_fails_validation() {
        let mut config = KeywardenConfig::default();
        config.clipboard.clear_after_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("clear_after_secs"))
        ));
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = KeywardenConfig::default();
        config.client.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
        ));
    }

    #[test]
    fn all_classes_disabled_fails_validation() {
        let mut config = KeywardenConfig::default();
        config.generator.uppercase = false;
        config.generator.lowercase = false;
        config.generator.digits = false;
        config.generator.symbols = false;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("character class"))
        ));
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = KeywardenConfig::default();
        config.clipboard.clear_after_secs = 0;
        config.generator.length = 2;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
