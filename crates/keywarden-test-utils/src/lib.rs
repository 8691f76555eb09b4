// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Keywarden integration tests.
//!
//! Provides mock collaborators for fast, deterministic, CI-runnable tests
//! without a server or a host clipboard.
//!
//! # Components
//!
//! - [`MemoryVaultStore`] - In-memory ciphertext store with assigned ids
//! - [`StaticSession`] - Fixed identity and bearer credential
//! - [`RecordingClipboard`] - Clipboard sink that captures writes and clears

pub mod memory_store;
pub mod recording_clipboard;
pub mod static_session;

pub use memory_store::MemoryVaultStore;
pub use recording_clipboard::RecordingClipboard;
pub use static_session::StaticSession;
