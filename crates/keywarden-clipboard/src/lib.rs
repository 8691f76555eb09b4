// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded-exposure window for the Keywarden vault client.
//!
//! When a decrypted secret is revealed to the host (today: copied to the
//! clipboard), it must stop being accessible after a fixed window. This
//! crate provides the reveal-then-auto-revoke primitive: a per-tag state
//! machine driven by a single scheduler loop, so cancelled or replaced
//! exposures can never fire a stale revoke.

pub mod window;

pub use window::{spawn_revoke_scheduler, ExposureWindow};
