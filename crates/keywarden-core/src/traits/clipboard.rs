// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clipboard sink trait used by the exposure window.

use crate::error::KeywardenError;

/// An opaque "write text" capability for the host clipboard.
///
/// The exposure window is the only caller: it writes a revealed secret on
/// expose and overwrites it with empty text on revoke.
pub trait ClipboardSink: Send + Sync {
    /// Places the given text on the clipboard.
    fn write_text(&self, text: &str) -> Result<(), KeywardenError>;

    /// Overwrites the clipboard with empty text.
    fn clear(&self) -> Result<(), KeywardenError>;
}
