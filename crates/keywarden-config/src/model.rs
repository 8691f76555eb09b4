// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Keywarden vault client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.
//!
//! Key-derivation parameters are deliberately absent: the iteration count is
//! a compiled constant, because a misconfigured client must not be able to
//! weaken derivation or derive a key that cannot read existing items.

use serde::{Deserialize, Serialize};

/// Top-level Keywarden configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KeywardenConfig {
    /// Client-wide behavior settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Clipboard exposure-window settings.
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Password generator defaults.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Client-wide behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Clipboard exposure-window configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardConfig {
    /// Seconds a copied secret stays on the clipboard before auto-revoke.
    #[serde(default = "default_clear_after_secs")]
    pub clear_after_secs: u32,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            clear_after_secs: default_clear_after_secs(),
        }
    }
}

/// Password generator defaults, applied when the user opens the generator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default = "default_generator_length")]
    pub length: usize,
    #[serde(default = "default_true")]
    pub uppercase: bool,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_true")]
    pub digits: bool,
    #[serde(default = "default_true")]
    pub symbols: bool,
    #[serde(default = "default_true")]
    pub exclude_similar: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: default_generator_length(),
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_similar: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_clear_after_secs() -> u32 {
    15
}

fn default_generator_length() -> usize {
    16
}

fn default_true() -> bool {
    true
}
