// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Keywarden configuration system.

use keywarden_config::diagnostic::ConfigError;
use keywarden_config::model::KeywardenConfig;
use keywarden_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_keywarden_config() {
    let toml = r#"
[client]
log_level = "debug"

[clipboard]
clear_after_secs = 30

[generator]
length = 24
uppercase = true
lowercase = true
digits = false
symbols = false
exclude_similar = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.client.log_level, "debug");
    assert_eq!(config.clipboard.clear_after_secs, 30);
    assert_eq!(config.generator.length, 24);
    assert!(config.generator.uppercase);
    assert!(!config.generator.digits);
    assert!(!config.generator.exclude_similar);
}

/// Empty input yields the compiled defaults.
#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    assert_eq!(config.client.log_level, "info");
    assert_eq!(config.clipboard.clear_after_secs, 15);
    assert_eq!(config.generator.length, 16);
    assert!(config.generator.exclude_similar);
}

/// Unknown field in a section produces an UnknownKey error with a
/// suggestion.
#[test]
fn unknown_field_produces_suggestion() {
    let toml = r#"
[generator]
lenght = 20
"#;

    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "lenght" && suggestion.as_deref() == Some("length")
    )));
}

/// A value of the wrong type is reported as such, not as a panic.
#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[clipboard]
clear_after_secs = "soon"
"#;

    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(!errors.is_empty());
}

/// Semantic validation runs after deserialization and collects every error.
#[test]
fn semantic_validation_collects_all_errors() {
    let toml = r#"
[clipboard]
clear_after_secs = 0

[generator]
length = 2
"#;

    let errors = load_and_validate_str(toml).unwrap_err();
    let validation_errors = errors
        .iter()
        .filter(|e| matches!(e, ConfigError::Validation { .. }))
        .count();
    assert_eq!(validation_errors, 2);
}

/// toml::from_str honors deny_unknown_fields directly too.
#[test]
fn toml_parse_denies_unknown_sections() {
    let toml = r#"
[vault]
kdf_iterations = 1
"#;
    let result = toml::from_str::<KeywardenConfig>(toml);
    assert!(result.is_err());
}

/// Defaults validate cleanly end to end.
#[test]
fn defaults_pass_validation() {
    let config = load_and_validate_str("").expect("defaults must validate");
    assert_eq!(config.clipboard.clear_after_secs, 15);
}

/// `KEYWARDEN_*` environment variables override file and default values.
#[test]
#[serial_test::serial]
fn env_vars_override_defaults() {
    // SAFETY: test-only env mutation; serialized so no other test races it.
    unsafe { std::env::set_var("KEYWARDEN_CLIPBOARD_CLEAR_AFTER_SECS", "45") };
    let config = keywarden_config::load_config().expect("config should load");
    unsafe { std::env::remove_var("KEYWARDEN_CLIPBOARD_CLEAR_AFTER_SECS") };

    assert_eq!(config.clipboard.clear_after_secs, 45);
}
