// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage collaborator trait for the ciphertext persistence backend.

use async_trait::async_trait;

use crate::error::KeywardenError;
use crate::types::{EncryptedVaultItem, ItemId};

/// The persistence boundary. Implementations store only ciphertext blobs
/// keyed by opaque item ids; plaintext never crosses this trait.
///
/// Ownership (scoping an id to the identity that created it) is enforced by
/// the implementation, never by the encryption core.
#[async_trait]
pub trait VaultStore: Send + Sync {
    /// Persists a new item (`id` must be absent) and returns it enriched
    /// with an assigned id and creation timestamp.
    async fn create_item(
        &self,
        item: EncryptedVaultItem,
    ) -> Result<EncryptedVaultItem, KeywardenError>;

    /// Fetches a single item by id, or `None` when it does not exist.
    async fn get_item(&self, id: &ItemId) -> Result<Option<EncryptedVaultItem>, KeywardenError>;

    /// Replaces the stored ciphertext of an existing item and returns the
    /// updated record with a refreshed update timestamp.
    async fn update_item(
        &self,
        id: &ItemId,
        item: EncryptedVaultItem,
    ) -> Result<EncryptedVaultItem, KeywardenError>;

    /// Removes the record with the given id.
    async fn delete_item(&self, id: &ItemId) -> Result<(), KeywardenError>;

    /// Returns all items scoped to the calling identity.
    async fn list_items(&self) -> Result<Vec<EncryptedVaultItem>, KeywardenError>;
}
