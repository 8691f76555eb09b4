// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into miette diagnostics with
//! valid key listings and "did you mean?" suggestions using Jaro-Winkler
//! string similarity.

use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `lenght` -> `length` or
/// `clear_after_sec` -> `clear_after_secs` while filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with diagnostic context.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(keywarden::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of valid keys for the section.
        valid_keys: String,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(keywarden::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// The key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(keywarden::config::missing_key),
        help("add `{key} = <value>` to your keywarden.toml")
    )]
    MissingKey {
        /// The missing key name.
        key: String,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(keywarden::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(keywarden::config::other))]
    Other(String),
}

/// Format the help message for unknown key errors.
fn format_unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A figment error may contain multiple underlying errors; each becomes its
/// own diagnostic, with fuzzy match suggestions for unknown field errors.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    use figment::error::Kind;

    let mut errors = Vec::new();

    for error in err {
        let config_error = match &error.kind {
            Kind::UnknownField(field, expected) => {
                let valid_keys: Vec<&str> = expected.to_vec();
                let suggestion = suggest_key(field, &valid_keys);
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                    valid_keys: valid_keys.join(", "),
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: field.clone().into_owned(),
            },
            Kind::InvalidType(actual, expected) => {
                let key = error
                    .path
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(".");
                ConfigError::InvalidType {
                    key,
                    detail: format!("found {actual}, expected {expected}"),
                    expected: expected.to_string(),
                }
            }
            _ => ConfigError::Other(format!("{error}")),
        };

        errors.push(config_error);
    }

    errors
}

/// Suggest a similar key name using Jaro-Winkler string similarity.
///
/// Returns the best match above the similarity threshold, or `None` if no
/// valid key is close enough to the unknown key.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    let mut best_score = SUGGESTION_THRESHOLD;
    let mut best_match = None;

    for &key in valid_keys {
        let score = strsim::jaro_winkler(unknown, key);
        if score > best_score {
            best_score = score;
            best_match = Some(key.to_string());
        }
    }

    best_match
}

/// Render a list of `ConfigError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}
