// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits for the boundaries the vault core depends on.

pub mod clipboard;
pub mod session;
pub mod store;

pub use clipboard::ClipboardSink;
pub use session::SessionAuth;
pub use store::VaultStore;
