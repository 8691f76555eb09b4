// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cryptographic core of the Keywarden vault client.
//!
//! Two building blocks, both pure functions over their inputs:
//!
//! - [`kdf::derive_key`] turns (identity, passphrase) into a stable 256-bit
//!   key. The same two inputs always yield the same key, which is what lets
//!   a fresh login decrypt items stored in earlier sessions.
//! - [`field::encrypt_field`] / [`field::decrypt_field`] seal one text field
//!   at a time under a derived key, with a fresh random IV per call.
//!
//! Plaintext never leaves this crate in any persisted or transmitted form.

pub mod field;
pub mod kdf;

pub use field::{decrypt_field, encrypt_field, IV_HEX_LEN, IV_LEN};
pub use kdf::{derive_key, KEY_LEN};
