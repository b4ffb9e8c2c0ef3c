//! Document service
//!
//! Field-level CRUD and document lifecycle. Every public method appends
//! exactly one audit entry describing its outcome before returning it.
//!
//! Writes are read-modify-write cycles with no locking: two concurrent
//! writers to the same document can interleave and the later write
//! overwrites the earlier one. Creation checks for an existing document and
//! then writes; two concurrent creators can both succeed, the later write
//! winning.

use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::models::{describe_value, Document, DocumentId};
use crate::storage::Storage;

/// Service for document CRUD
pub struct DocumentService<'a> {
    storage: &'a Storage,
}

impl<'a> DocumentService<'a> {
    /// Create a new document service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the value stored under `key`
    pub async fn get(&self, doc: &str, key: &str) -> StoreResult<Value> {
        let outcome = self.try_get(doc, key).await;
        self.storage.record(outcome, describe_value).await
    }

    async fn try_get(&self, doc: &str, key: &str) -> StoreResult<Value> {
        let id = DocumentId::parse(doc)?;
        let data = self.storage.documents.load(&id).await?;

        data.get(key)
            .cloned()
            .ok_or_else(|| StoreError::key_not_found(id.as_str(), key))
    }

    /// Get the full contents of a document
    pub async fn read(&self, doc: &str) -> StoreResult<Document> {
        let outcome = self.try_read(doc).await;
        self.storage
            .record(outcome, |data| {
                format!("read '{}' ({} keys)", doc_name(doc), data.len())
            })
            .await
    }

    async fn try_read(&self, doc: &str) -> StoreResult<Document> {
        let id = DocumentId::parse(doc)?;
        self.storage.documents.load(&id).await
    }

    /// Insert or overwrite `key` and persist the whole document
    pub async fn set(&self, doc: &str, key: &str, value: Value) -> StoreResult<()> {
        let message_value = describe_value(&value);
        let outcome = self.try_set(doc, key, value).await;
        self.storage
            .record(outcome, |id| {
                format!("{} successfully set {} to be {}", id, key, message_value)
            })
            .await
            .map(|_| ())
    }

    async fn try_set(&self, doc: &str, key: &str, value: Value) -> StoreResult<DocumentId> {
        let id = DocumentId::parse(doc)?;
        let mut data = self.storage.documents.load(&id).await?;

        data.insert(key.to_string(), value);
        self.storage.documents.save(&id, &data).await?;

        Ok(id)
    }

    /// Delete `key` if present and persist the whole document
    ///
    /// Removing an absent key succeeds.
    pub async fn remove(&self, doc: &str, key: &str) -> StoreResult<()> {
        let outcome = self.try_remove(doc, key).await;
        self.storage
            .record(outcome, |id| format!("{} successfully removed {}", id, key))
            .await
            .map(|_| ())
    }

    async fn try_remove(&self, doc: &str, key: &str) -> StoreResult<DocumentId> {
        let id = DocumentId::parse(doc)?;
        let mut data = self.storage.documents.load(&id).await?;

        // shift_remove keeps the order of the remaining keys
        data.shift_remove(key);
        self.storage.documents.save(&id, &data).await?;

        Ok(id)
    }

    /// Create an empty document
    pub async fn create(&self, doc: &str) -> StoreResult<()> {
        self.create_with(doc, Document::new()).await
    }

    /// Create a document with initial contents
    ///
    /// Fails with `AlreadyExists` if a document is already stored under the
    /// same ID.
    pub async fn create_with(&self, doc: &str, initial: Document) -> StoreResult<()> {
        let outcome = self.try_create(doc, initial).await;
        self.storage
            .record(outcome, |id| format!("Successfully created '{}'", id))
            .await
            .map(|_| ())
    }

    async fn try_create(&self, doc: &str, initial: Document) -> StoreResult<DocumentId> {
        let id = DocumentId::parse(doc)?;

        if self.storage.documents.exists(&id).await? {
            return Err(StoreError::AlreadyExists { id: id.to_string() });
        }

        self.storage.documents.save(&id, &initial).await?;
        Ok(id)
    }

    /// Delete a document
    pub async fn delete(&self, doc: &str) -> StoreResult<()> {
        let outcome = self.try_delete(doc).await;
        self.storage
            .record(outcome, |id| format!("Successfully deleted '{}'", id))
            .await
            .map(|_| ())
    }

    async fn try_delete(&self, doc: &str) -> StoreResult<DocumentId> {
        let id = DocumentId::parse(doc)?;
        self.storage.documents.delete(&id).await?;
        Ok(id)
    }

    /// List the IDs of every stored document
    ///
    /// A lookup helper; not recorded in the audit log.
    pub async fn list(&self) -> StoreResult<Vec<DocumentId>> {
        self.storage.documents.list().await
    }
}

/// Name to use in messages; falls back to the raw input for invalid IDs
fn doc_name(doc: &str) -> String {
    DocumentId::parse(doc)
        .map(|id| id.to_string())
        .unwrap_or_else(|_| doc.to_string())
}
