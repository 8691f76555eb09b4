// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vault client orchestration over the injected collaborators.
//!
//! Every read/write pulls the passphrase from the session cache and the
//! identity from the session collaborator, derives the key through the
//! codec, and hands only ciphertext to the storage collaborator. A missing
//! cached passphrase is surfaced as `CacheMiss` so callers can route the
//! user back to credential entry instead of failing.

use std::sync::Arc;

use keywarden_core::{
    EncryptedField, EncryptedVaultItem, ItemId, KeywardenError, SessionAuth, VaultItem,
    VaultItemPatch, VaultStore,
};
use keywarden_crypto::{derive_key, encrypt_field, KEY_LEN};
use keywarden_session::PassphraseCache;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::codec::{self, VaultPage};

/// The client-side vault facade: codec plus collaborators.
///
/// All state is injected; tests wire in mock collaborators and an isolated
/// cache. Ownership of item ids is the storage collaborator's concern --
/// this client never checks it.
pub struct VaultClient {
    store: Arc<dyn VaultStore>,
    session: Arc<dyn SessionAuth>,
    cache: Arc<PassphraseCache>,
}

impl VaultClient {
    pub fn new(
        store: Arc<dyn VaultStore>,
        session: Arc<dyn SessionAuth>,
        cache: Arc<PassphraseCache>,
    ) -> Self {
        Self {
            store,
            session,
            cache,
        }
    }

    /// Caches the passphrase for this session.
    pub fn login(&self, passphrase: &SecretString) -> Result<(), KeywardenError> {
        self.cache.store(passphrase)
    }

    /// Drops the cached passphrase; subsequent vault calls yield `CacheMiss`.
    pub fn logout(&self) {
        self.cache.clear();
    }

    /// Encrypts and persists a new item, returning it enriched with the
    /// storage-assigned id and creation timestamp.
    pub async fn save_item(
        &self,
        item: &VaultItem,
    ) -> Result<EncryptedVaultItem, KeywardenError> {
        let passphrase = self.passphrase()?;
        let encrypted = codec::encrypt_item(
            item,
            self.session.identity(),
            passphrase.expose_secret(),
        )?;

        let stored = self.store.create_item(encrypted).await?;
        debug!(id = stored.id.as_ref().map(|id| id.0.as_str()), "vault item saved");
        Ok(stored)
    }

    /// Fetches and decrypts the whole vault listing. Undecryptable records
    /// come back degraded inside the page rather than failing the list.
    pub async fn list_items(&self) -> Result<VaultPage, KeywardenError> {
        let passphrase = self.passphrase()?;
        let encrypted = self.store.list_items().await?;
        codec::decrypt_items(
            &encrypted,
            self.session.identity(),
            passphrase.expose_secret(),
        )
    }

    /// Re-encrypts the fields present in the patch and leaves the stored
    /// ciphertext of every other field untouched.
    pub async fn update_item(
        &self,
        id: &ItemId,
        patch: &VaultItemPatch,
    ) -> Result<EncryptedVaultItem, KeywardenError> {
        if patch.is_empty() {
            return Err(KeywardenError::InvalidInput(
                "update patch contains no fields".to_string(),
            ));
        }
        if patch.title.as_deref() == Some("") {
            return Err(KeywardenError::InvalidInput(
                "vault items require a title".to_string(),
            ));
        }

        let passphrase = self.passphrase()?;
        let key = derive_key(self.session.identity(), passphrase.expose_secret())?;

        let mut item = self
            .store
            .get_item(id)
            .await?
            .ok_or_else(|| KeywardenError::store(format!("no item with id {}", id.0)))?;

        if let Some(title) = patch.title.as_deref() {
            item.title = encrypt_field(title, &key)?;
        }
        apply_field(&mut item.username, patch.username.as_deref(), &key)?;
        apply_field(&mut item.password, patch.password.as_deref(), &key)?;
        apply_field(&mut item.website, patch.website.as_deref(), &key)?;
        apply_field(&mut item.notes, patch.notes.as_deref(), &key)?;

        let updated = self.store.update_item(id, item).await?;
        debug!(id = %id.0, "vault item updated");
        Ok(updated)
    }

    /// Removes the item by id.
    pub async fn delete_item(&self, id: &ItemId) -> Result<(), KeywardenError> {
        self.store.delete_item(id).await?;
        debug!(id = %id.0, "vault item deleted");
        Ok(())
    }

    fn passphrase(&self) -> Result<SecretString, KeywardenError> {
        self.cache.get().ok_or(KeywardenError::CacheMiss)
    }
}

/// Applies one optional-field patch: a blank value clears the field, a
/// non-blank value replaces its ciphertext, `None` leaves it untouched.
fn apply_field(
    slot: &mut Option<EncryptedField>,
    patch: Option<&str>,
    key: &[u8; KEY_LEN],
) -> Result<(), KeywardenError> {
    match patch {
        None => {}
        Some("") => *slot = None,
        Some(value) => *slot = Some(encrypt_field(value, key)?),
    }
    Ok(())
}
