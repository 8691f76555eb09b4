// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The vault data model shared across the Keywarden crates.
//!
//! `VaultItem` is the plaintext form a user edits; `EncryptedVaultItem` is
//! the only form that ever leaves the client process. The two have identical
//! shape, with every sensitive field replaced by an [`EncryptedField`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Opaque identifier assigned to a stored item by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// One IV-prefixed ciphertext blob for a single logical text field.
///
/// Wire encoding: `hex(16-byte IV) || base64(ciphertext)`. The first 32 hex
/// characters are always the IV; this exact layout is a compatibility
/// contract for reading previously stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncryptedField(pub String);

impl EncryptedField {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The logical fields of a vault item. Title is required; the rest are
/// optional and stay absent when the user leaves them blank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Title,
    Username,
    Password,
    Website,
    Notes,
}

/// A vault record in plaintext form. Exists only inside the client process.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl std::fmt::Debug for VaultItem {
    /// Debug output intentionally omits the secret value.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultItem")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("website", &self.website)
            .field("notes", &self.notes.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// A vault record with every sensitive field encrypted. Carries the item id
/// and timestamps assigned by the storage collaborator once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedVaultItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub title: EncryptedField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<EncryptedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<EncryptedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<EncryptedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<EncryptedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EncryptedVaultItem {
    /// Returns the ciphertext for the given field, if present.
    pub fn field(&self, kind: FieldKind) -> Option<&EncryptedField> {
        match kind {
            FieldKind::Title => Some(&self.title),
            FieldKind::Username => self.username.as_ref(),
            FieldKind::Password => self.password.as_ref(),
            FieldKind::Website => self.website.as_ref(),
            FieldKind::Notes => self.notes.as_ref(),
        }
    }
}

/// A partial update to a stored item. `None` leaves the stored ciphertext
/// for that field untouched.
#[derive(Debug, Clone, Default)]
pub struct VaultItemPatch {
    pub title: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
}

impl VaultItemPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.website.is_none()
            && self.notes.is_none()
    }
}
