// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clipboard sink that records writes and clears for assertions.

use std::sync::{Mutex, PoisonError};

use keywarden_core::{ClipboardSink, KeywardenError};

/// A `ClipboardSink` that captures every write and counts every clear.
#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    clears: Mutex<usize>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text written so far, in order.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many times the clipboard was cleared.
    pub fn clears(&self) -> usize {
        *self.clears.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), KeywardenError> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), KeywardenError> {
        *self.clears.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
