// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vault item handling for the Keywarden client.
//!
//! The codec maps plaintext vault records to and from their encrypted-field
//! representation; the client wires the codec to the storage and session
//! collaborators so every read/write re-derives the key from the cached
//! credentials. Ciphertext is the only thing that crosses the network
//! boundary -- plaintext never does.

pub mod client;
pub mod codec;
pub mod generator;

pub use client::VaultClient;
pub use codec::{decrypt_item, decrypt_items, encrypt_item, DecryptedItem, VaultPage};
pub use generator::{generate_password, strength, GeneratorOptions, Strength};
