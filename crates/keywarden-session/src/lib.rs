// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session-scoped passphrase cache for the Keywarden vault client.
//!
//! Holding the passphrase for the session lets the client re-derive the
//! vault key on every read/write without re-prompting the user. The cache
//! never holds the passphrase in clear form: it is sealed under an ephemeral
//! random key that exists only in this process's memory and dies with it.

pub mod cache;

pub use cache::PassphraseCache;
