// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session/auth collaborator trait supplying the current identity.

use secrecy::SecretString;

/// Supplies the logged-in identity and the bearer credential used for
/// storage calls.
///
/// The identity is non-secret (it doubles as the key-derivation salt); the
/// bearer credential is opaque to the encryption core, which neither parses
/// nor validates it.
pub trait SessionAuth: Send + Sync {
    /// The current user's identity string (email/login).
    fn identity(&self) -> &str;

    /// The bearer credential to attach to storage-collaborator calls.
    fn bearer_token(&self) -> SecretString;
}
