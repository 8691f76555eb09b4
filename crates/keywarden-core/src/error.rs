// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Keywarden vault client.

use thiserror::Error;

/// The primary error type used across the Keywarden crates.
///
/// The cryptographic variants follow a strict propagation policy:
/// `InvalidInput` and `Encryption` always abort the operation that raised
/// them, while `Decryption` is recoverable at the item level -- the vault
/// codec converts it into a per-field partial result so one corrupted
/// record cannot hide the rest of the vault.
#[derive(Debug, Error)]
pub enum KeywardenError {
    /// A required input (identity, passphrase, plaintext) was missing or empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Encryption could not proceed, e.g. the system CSPRNG is unavailable.
    /// Fatal for the current operation; surfaced to the user as "try again".
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed: wrong credentials or corrupted ciphertext.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// No passphrase is cached for this session. Not a failure -- a routine
    /// signal that the caller must route the user back to credential entry.
    #[error("no cached passphrase; re-authentication required")]
    CacheMiss,

    /// Configuration errors (invalid TOML, unknown keys, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage collaborator errors (transport failure, unknown item id).
    #[error("storage error: {message}")]
    Store {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Clipboard sink errors (host clipboard unavailable).
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl KeywardenError {
    /// Shorthand for a `Store` error without an underlying source.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }
}
