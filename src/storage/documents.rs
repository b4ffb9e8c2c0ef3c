//! Document repository for JSON storage
//!
//! One file per document under the documents directory, named
//! `<id>.json`. The repository does raw I/O only; it never writes to the
//! audit log.

use std::path::PathBuf;

use crate::error::{StoreError, StoreResult};
use crate::models::{parse_document, Document, DocumentId};

use super::file_io::{write_json_atomic, WriteOptions};

/// Repository for document persistence
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    dir: PathBuf,
    options: WriteOptions,
}

impl DocumentRepository {
    /// Create a new document repository rooted at `dir`
    pub fn new(dir: PathBuf, options: WriteOptions) -> Self {
        Self { dir, options }
    }

    /// Path of the file backing `id`
    pub fn path_for(&self, id: &DocumentId) -> PathBuf {
        self.dir.join(id.file_name())
    }

    /// Check whether a document is stored under `id`
    pub async fn exists(&self, id: &DocumentId) -> StoreResult<bool> {
        tokio::fs::try_exists(self.path_for(id))
            .await
            .map_err(|e| StoreError::Io(format!("Failed to check '{}': {}", id, e)))
    }

    /// Load a document
    ///
    /// A missing or unreadable file is `DocumentNotFound`; contents that are
    /// not a JSON object are `NotAnObject`.
    pub async fn load(&self, id: &DocumentId) -> StoreResult<Document> {
        let raw = tokio::fs::read_to_string(self.path_for(id))
            .await
            .map_err(|e| {
                tracing::debug!(document = %id, error = %e, "document read failed");
                StoreError::document_not_found(id.as_str())
            })?;

        parse_document(id.as_str(), &raw)
    }

    /// Replace the stored contents of a document
    pub async fn save(&self, id: &DocumentId, doc: &Document) -> StoreResult<()> {
        write_json_atomic(self.path_for(id), doc, self.options).await
    }

    /// Delete a document's file
    pub async fn delete(&self, id: &DocumentId) -> StoreResult<()> {
        match tokio::fs::remove_file(self.path_for(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StoreError::DoesNotExist {
                id: id.to_string(),
            }),
            Err(e) => Err(StoreError::Io(format!("Failed to delete '{}': {}", id, e))),
        }
    }

    /// List every stored document, sorted by ID
    ///
    /// A missing documents directory is an empty store.
    pub async fn list(&self) -> StoreResult<Vec<DocumentId>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Io(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::Io(format!("Failed to list documents: {}", e)))?
        {
            if let Some(id) = DocumentId::from_path(&entry.path()) {
                ids.push(id);
            }
        }

        ids.sort();
        Ok(ids)
    }
}
