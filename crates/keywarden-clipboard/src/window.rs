// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-tag exposure timers with single-flight semantics.
//!
//! Each subject tag ("password", "username", ...) is either idle or armed
//! with a remaining-seconds counter. `start` arms a tag, replacing any live
//! ticket for it; `cancel` disarms; `tick` decrements every armed tag and
//! revokes the ones that reach zero, exactly once each. All expiry happens
//! inside `tick`, reading the current table, so a cancelled or replaced
//! ticket has nothing left to fire -- there is no stale-callback race to
//! guard against.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use keywarden_core::{ClipboardSink, KeywardenError};
use tracing::{debug, warn};

/// Reveal-then-auto-revoke timer table over a clipboard sink.
///
/// Generic over the subject tag: the vault UI currently exposes "password"
/// and "username", but any sensitive value with a bounded exposure time can
/// use its own tag.
pub struct ExposureWindow {
    sink: Arc<dyn ClipboardSink>,
    armed: Mutex<HashMap<String, u32>>,
}

impl ExposureWindow {
    pub fn new(sink: Arc<dyn ClipboardSink>) -> Self {
        Self {
            sink,
            armed: Mutex::new(HashMap::new()),
        }
    }

    /// Copies `text` to the clipboard and arms an exposure for `tag`.
    pub fn expose(
        &self,
        tag: &str,
        text: &str,
        duration_secs: u32,
    ) -> Result<(), KeywardenError> {
        self.sink.write_text(text)?;
        self.start(tag, duration_secs)
    }

    /// Arms an exposure for `tag`, replacing any live ticket for the same
    /// tag. At most one ticket per tag exists; timers never stack.
    pub fn start(&self, tag: &str, duration_secs: u32) -> Result<(), KeywardenError> {
        if tag.is_empty() {
            return Err(KeywardenError::InvalidInput(
                "exposure tag is required".to_string(),
            ));
        }
        if duration_secs == 0 {
            return Err(KeywardenError::InvalidInput(
                "exposure duration must be at least one second".to_string(),
            ));
        }

        let replaced = self
            .lock()
            .insert(tag.to_string(), duration_secs)
            .is_some();
        debug!(tag, duration_secs, replaced, "exposure armed");
        Ok(())
    }

    /// Disarms `tag`. Returns whether a live ticket was cancelled.
    pub fn cancel(&self, tag: &str) -> bool {
        let cancelled = self.lock().remove(tag).is_some();
        if cancelled {
            debug!(tag, "exposure cancelled");
        }
        cancelled
    }

    /// Disarms every tag without invoking any revoke.
    pub fn cancel_all(&self) {
        self.lock().clear();
    }

    /// Remaining seconds on the live ticket for `tag`, if any.
    pub fn remaining(&self, tag: &str) -> Option<u32> {
        self.lock().get(tag).copied()
    }

    /// Advances every armed tag by one second and revokes the ones whose
    /// window elapsed. Returns the tags revoked this tick.
    ///
    /// The ticket is removed before the sink is invoked, so each exposure
    /// revokes at most once even if the sink itself calls back in.
    pub fn tick(&self) -> Vec<String> {
        let expired: Vec<String> = {
            let mut armed = self.lock();
            for remaining in armed.values_mut() {
                *remaining -= 1;
            }
            let expired: Vec<String> = armed
                .iter()
                .filter(|(_, remaining)| **remaining == 0)
                .map(|(tag, _)| tag.clone())
                .collect();
            for tag in &expired {
                armed.remove(tag);
            }
            expired
        };

        for tag in &expired {
            debug!(tag, "exposure window elapsed; revoking");
            if let Err(err) = self.sink.clear() {
                warn!(tag, %err, "failed to clear clipboard on revoke");
            }
        }
        expired
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, u32>> {
        self.armed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Drives an [`ExposureWindow`] from a single once-per-second loop.
///
/// All expirations flow through this one task; abort the handle to stop it
/// (e.g. on logout, after `cancel_all`).
pub fn spawn_revoke_scheduler(window: Arc<ExposureWindow>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        // The first interval tick completes immediately; consume it so a
        // fresh ticket gets its full window.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            window.tick();
        }
    })
}
