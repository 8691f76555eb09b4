// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field-by-field codec between `VaultItem` and `EncryptedVaultItem`.
//!
//! The key is derived once per item operation, not once per field: PBKDF2's
//! iterated hashing is expensive, and one item carries up to five fields.
//!
//! Decryption is deliberately lenient at the item level: a single corrupted
//! field must not hide the rest of the item, and a single corrupted item
//! must not hide the rest of the vault. Per-field failures are collected
//! into the outcome instead of propagated.

use chrono::{DateTime, Utc};
use keywarden_core::{
    EncryptedField, EncryptedVaultItem, FieldKind, ItemId, KeywardenError, VaultItem,
};
use keywarden_crypto::{decrypt_field, derive_key, encrypt_field, KEY_LEN};
use tracing::warn;

/// The outcome of decrypting one stored item.
///
/// `failed_fields` lists every field whose ciphertext would not open under
/// the supplied credentials; those fields are absent (title: empty) in
/// `item` so the caller can surface a degraded record.
#[derive(Debug, Clone)]
pub struct DecryptedItem {
    pub id: Option<ItemId>,
    pub item: VaultItem,
    pub failed_fields: Vec<FieldKind>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl DecryptedItem {
    /// Whether every present field decrypted cleanly.
    pub fn is_intact(&self) -> bool {
        self.failed_fields.is_empty()
    }
}

/// A decrypted listing of the vault, with a count of degraded items so the
/// UI can show "N items could not be decrypted" next to the healthy rows.
#[derive(Debug, Clone, Default)]
pub struct VaultPage {
    pub items: Vec<DecryptedItem>,
    pub degraded: usize,
}

/// Encrypts a plaintext item under the key derived from the credentials.
///
/// Absent optional fields (and fields the user left blank) stay absent in
/// the output -- they are neither encrypted nor defaulted.
pub fn encrypt_item(
    item: &VaultItem,
    identity: &str,
    passphrase: &str,
) -> Result<EncryptedVaultItem, KeywardenError> {
    if item.title.is_empty() {
        return Err(KeywardenError::InvalidInput(
            "vault items require a title".to_string(),
        ));
    }

    let key = derive_key(identity, passphrase)?;
    Ok(EncryptedVaultItem {
        id: None,
        title: encrypt_field(&item.title, &key)?,
        username: encrypt_present(item.username.as_deref(), &key)?,
        password: encrypt_present(item.password.as_deref(), &key)?,
        website: encrypt_present(item.website.as_deref(), &key)?,
        notes: encrypt_present(item.notes.as_deref(), &key)?,
        created_at: None,
        updated_at: None,
    })
}

/// Decrypts one stored item, collecting per-field failures instead of
/// aborting. `InvalidInput` (bad credentials at the call site) still
/// propagates.
pub fn decrypt_item(
    item: &EncryptedVaultItem,
    identity: &str,
    passphrase: &str,
) -> Result<DecryptedItem, KeywardenError> {
    let key = derive_key(identity, passphrase)?;
    Ok(decrypt_item_with_key(item, &key))
}

/// Decrypts a whole listing with one key derivation for the entire batch.
pub fn decrypt_items(
    items: &[EncryptedVaultItem],
    identity: &str,
    passphrase: &str,
) -> Result<VaultPage, KeywardenError> {
    let key = derive_key(identity, passphrase)?;

    let decrypted: Vec<DecryptedItem> = items
        .iter()
        .map(|item| decrypt_item_with_key(item, &key))
        .collect();
    let degraded = decrypted.iter().filter(|d| !d.is_intact()).count();
    if degraded > 0 {
        warn!(degraded, total = items.len(), "vault listing contains undecryptable items");
    }

    Ok(VaultPage {
        items: decrypted,
        degraded,
    })
}

fn decrypt_item_with_key(item: &EncryptedVaultItem, key: &[u8; KEY_LEN]) -> DecryptedItem {
    let mut failed = Vec::new();

    let title = match decrypt_field(&item.title, key) {
        Ok(title) => title,
        Err(_) => {
            failed.push(FieldKind::Title);
            String::new()
        }
    };
    let username = decrypt_present(item.username.as_ref(), key, FieldKind::Username, &mut failed);
    let password = decrypt_present(item.password.as_ref(), key, FieldKind::Password, &mut failed);
    let website = decrypt_present(item.website.as_ref(), key, FieldKind::Website, &mut failed);
    let notes = decrypt_present(item.notes.as_ref(), key, FieldKind::Notes, &mut failed);

    if !failed.is_empty() {
        warn!(
            id = item.id.as_ref().map(|id| id.0.as_str()),
            fields = failed.len(),
            "item decrypted with failed fields"
        );
    }

    DecryptedItem {
        id: item.id.clone(),
        item: VaultItem {
            title,
            username,
            password,
            website,
            notes,
        },
        failed_fields: failed,
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}

fn encrypt_present(
    value: Option<&str>,
    key: &[u8; KEY_LEN],
) -> Result<Option<EncryptedField>, KeywardenError> {
    match value {
        Some(value) if !value.is_empty() => Ok(Some(encrypt_field(value, key)?)),
        _ => Ok(None),
    }
}

fn decrypt_present(
    field: Option<&EncryptedField>,
    key: &[u8; KEY_LEN],
    kind: FieldKind,
    failed: &mut Vec<FieldKind>,
) -> Option<String> {
    let blob = field?;
    match decrypt_field(blob, key) {
        Ok(value) => Some(value),
        Err(_) => {
            failed.push(kind);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: &str = "alice@example.com";
    const PASSPHRASE: &str = "correct-horse-battery";

    fn sample_item() -> VaultItem {
        VaultItem {
            title: "Bank".to_string(),
            username: Some("alice".to_string()),
            password: Some("S3cr3t!".to_string()),
            website: Some("bank.example.com".to_string()),
            notes: None,
        }
    }

    #[test]
    fn encrypt_then_decrypt_recovers_the_item() {
        let encrypted = encrypt_item(&sample_item(), IDENTITY, PASSPHRASE).unwrap();
        let decrypted = decrypt_item(&encrypted, IDENTITY, PASSPHRASE).unwrap();

        assert!(decrypted.is_intact());
        assert_eq!(decrypted.item, sample_item());
    }

    #[test]
    fn absent_fields_stay_absent() {
        let encrypted = encrypt_item(&sample_item(), IDENTITY, PASSPHRASE).unwrap();
        assert!(encrypted.notes.is_none());
        assert!(encrypted.username.is_some());
    }

    #[test]
    fn blank_optional_fields_are_treated_as_absent() {
        let mut item = sample_item();
        item.username = Some(String::new());
        let encrypted = encrypt_item(&item, IDENTITY, PASSPHRASE).unwrap();
        assert!(encrypted.username.is_none());
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut item = sample_item();
        item.title = String::new();
        let result = encrypt_item(&item, IDENTITY, PASSPHRASE);
        assert!(matches!(result, Err(KeywardenError::InvalidInput(_))));
    }

    #[test]
    fn empty_credentials_propagate_invalid_input() {
        let result = encrypt_item(&sample_item(), "", PASSPHRASE);
        assert!(matches!(result, Err(KeywardenError::InvalidInput(_))));

        let encrypted = encrypt_item(&sample_item(), IDENTITY, PASSPHRASE).unwrap();
        let result = decrypt_item(&encrypted, IDENTITY, "");
        assert!(matches!(result, Err(KeywardenError::InvalidInput(_))));
    }

    #[test]
    fn one_corrupted_field_does_not_abort_the_item() {
        let mut encrypted = encrypt_item(&sample_item(), IDENTITY, PASSPHRASE).unwrap();
        // Truncate the password ciphertext so it is structurally invalid.
        encrypted.password = Some(EncryptedField("00".repeat(16)));

        let decrypted = decrypt_item(&encrypted, IDENTITY, PASSPHRASE).unwrap();
        assert_eq!(decrypted.failed_fields, vec![FieldKind::Password]);
        assert!(decrypted.item.password.is_none());
        assert_eq!(decrypted.item.title, "Bank");
        assert_eq!(decrypted.item.username.as_deref(), Some("alice"));
    }

    #[test]
    fn wrong_passphrase_fails_every_field() {
        let encrypted = encrypt_item(&sample_item(), IDENTITY, PASSPHRASE).unwrap();
        let decrypted = decrypt_item(&encrypted, IDENTITY, "wrong-password").unwrap();

        assert_eq!(decrypted.failed_fields.len(), 4);
        assert!(decrypted.failed_fields.contains(&FieldKind::Title));
        assert!(decrypted.item.title.is_empty());
    }

    #[test]
    fn batch_decrypt_counts_degraded_items() {
        let healthy = encrypt_item(&sample_item(), IDENTITY, PASSPHRASE).unwrap();
        let mut corrupted = encrypt_item(&sample_item(), IDENTITY, PASSPHRASE).unwrap();
        corrupted.title = EncryptedField("not even a blob".to_string());

        let page =
            decrypt_items(&[healthy, corrupted], IDENTITY, PASSPHRASE).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.degraded, 1);
        assert!(page.items[0].is_intact());
        assert!(!page.items[1].is_intact());
    }
}
