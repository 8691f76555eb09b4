// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory `VaultStore` for tests.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use keywarden_core::{EncryptedVaultItem, ItemId, KeywardenError, VaultStore};

/// A `VaultStore` backed by a `Vec`, mimicking the real storage
/// collaborator: it assigns opaque ids and timestamps and only ever sees
/// ciphertext. Items are scoped to a single identity by construction --
/// one store per test session.
#[derive(Default)]
pub struct MemoryVaultStore {
    items: Mutex<Vec<EncryptedVaultItem>>,
}

impl MemoryVaultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<EncryptedVaultItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl VaultStore for MemoryVaultStore {
    async fn create_item(
        &self,
        mut item: EncryptedVaultItem,
    ) -> Result<EncryptedVaultItem, KeywardenError> {
        if item.id.is_some() {
            return Err(KeywardenError::store("new items must not carry an id"));
        }
        let now = Utc::now();
        item.id = Some(ItemId(uuid::Uuid::new_v4().to_string()));
        item.created_at = Some(now);
        item.updated_at = Some(now);

        self.lock().push(item.clone());
        Ok(item)
    }

    async fn get_item(
        &self,
        id: &ItemId,
    ) -> Result<Option<EncryptedVaultItem>, KeywardenError> {
        Ok(self
            .lock()
            .iter()
            .find(|stored| stored.id.as_ref() == Some(id))
            .cloned())
    }

    async fn update_item(
        &self,
        id: &ItemId,
        mut item: EncryptedVaultItem,
    ) -> Result<EncryptedVaultItem, KeywardenError> {
        let mut items = self.lock();
        let stored = items
            .iter_mut()
            .find(|stored| stored.id.as_ref() == Some(id))
            .ok_or_else(|| KeywardenError::store(format!("no item with id {}", id.0)))?;

        item.id = Some(id.clone());
        item.created_at = stored.created_at;
        item.updated_at = Some(Utc::now());
        *stored = item.clone();
        Ok(item)
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), KeywardenError> {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|stored| stored.id.as_ref() != Some(id));
        if items.len() == before {
            return Err(KeywardenError::store(format!("no item with id {}", id.0)));
        }
        Ok(())
    }

    async fn list_items(&self) -> Result<Vec<EncryptedVaultItem>, KeywardenError> {
        Ok(self.lock().clone())
    }
}
