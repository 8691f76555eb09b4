// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Keywarden vault client.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use keywarden_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("clipboard window: {}s", config.clipboard.clear_after_secs);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{ClientConfig, ClipboardConfig, GeneratorConfig, KeywardenConfig};

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to miette diagnostics with typo suggestions
///
/// Returns either a valid `KeywardenConfig` or a list of diagnostic errors.
pub fn load_and_validate() -> Result<KeywardenConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load configuration from a specific TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<KeywardenConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}
