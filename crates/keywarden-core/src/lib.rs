// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Keywarden password-vault client.
//!
//! This crate provides the error taxonomy, the vault data model, and the
//! collaborator traits the encryption core depends on. The cryptographic
//! implementations live in `keywarden-crypto`; this crate stays free of
//! cipher dependencies so every other crate can share its types.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::KeywardenError;
pub use types::{
    EncryptedField, EncryptedVaultItem, FieldKind, ItemId, VaultItem, VaultItemPatch,
};

pub use traits::{ClipboardSink, SessionAuth, VaultStore};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn field_kind_display_round_trips() {
        let kinds = [
            FieldKind::Title,
            FieldKind::Username,
            FieldKind::Password,
            FieldKind::Website,
            FieldKind::Notes,
        ];
        for kind in kinds {
            let s = kind.to_string();
            assert_eq!(FieldKind::from_str(&s).unwrap(), kind);
        }
    }

    #[test]
    fn vault_item_debug_redacts_secrets() {
        let item = VaultItem {
            title: "Bank".into(),
            username: Some("alice".into()),
            password: Some("S3cr3t!".into()),
            website: None,
            notes: Some("pin is 1234".into()),
        };
        let rendered = format!("{item:?}");
        assert!(!rendered.contains("S3cr3t!"));
        assert!(!rendered.contains("pin is 1234"));
        assert!(rendered.contains("Bank"));
    }

    #[test]
    fn encrypted_item_serializes_without_absent_fields() {
        let item = EncryptedVaultItem {
            id: None,
            title: EncryptedField("aa".repeat(16) + "Y2lwaGVy"),
            username: None,
            password: Some(EncryptedField("bb".repeat(16) + "c2VjcmV0")),
            website: None,
            notes: None,
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"password\""));
        assert!(!json.contains("username"));
        assert!(!json.contains("createdAt"));

        let parsed: EncryptedVaultItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn patch_emptiness() {
        assert!(VaultItemPatch::default().is_empty());
        let patch = VaultItemPatch {
            password: Some("new".into()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
