//! Merge service
//!
//! Builds the composite snapshot: one JSON object mapping every document ID
//! to that document's contents, written wholesale to the snapshot file.
//!
//! Listing, reading and writing are separate steps with no isolation.
//! Documents created, changed or removed while a merge runs may or may not
//! show up in its snapshot.

use std::path::PathBuf;

use serde_json::Value;
use tokio::task::JoinSet;

use crate::error::{StoreError, StoreResult};
use crate::models::{Document, DocumentId};
use crate::storage::{write_json_atomic, Storage};

/// Result of a merge
#[derive(Debug)]
pub struct MergeReport {
    /// Document ID to contents, in ID order
    pub snapshot: Document,
    /// Documents left out because they could not be read
    pub skipped: Vec<(DocumentId, StoreError)>,
    /// Where the snapshot was written
    pub path: PathBuf,
}

impl MergeReport {
    /// One-line summary used as the audit entry
    pub fn summary(&self) -> String {
        let mut message = format!(
            "Successfully merged {} documents into '{}'",
            self.snapshot.len(),
            self.path.display()
        );

        if !self.skipped.is_empty() {
            let skipped: Vec<String> = self
                .skipped
                .iter()
                .map(|(id, err)| format!("'{}' ({})", id, err))
                .collect();
            message.push_str(&format!("; skipped {}", skipped.join(", ")));
        }

        message
    }
}

/// Service for whole-store aggregation
pub struct MergeService<'a> {
    storage: &'a Storage,
}

impl<'a> MergeService<'a> {
    /// Create a new merge service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Merge every document into the composite snapshot
    ///
    /// Individual documents that fail to load are omitted and named in the
    /// audit entry; only listing or snapshot-write failures fail the merge.
    pub async fn merge_all(&self) -> StoreResult<MergeReport> {
        let outcome = self.try_merge().await;
        self.storage.record(outcome, MergeReport::summary).await
    }

    async fn try_merge(&self) -> StoreResult<MergeReport> {
        let ids = self.storage.documents.list().await?;

        let mut reads = JoinSet::new();
        for (index, id) in ids.into_iter().enumerate() {
            let repo = self.storage.documents.clone();
            reads.spawn(async move {
                let result = repo.load(&id).await;
                (index, id, result)
            });
        }

        let mut loaded = Vec::new();
        while let Some(joined) = reads.join_next().await {
            let read = joined.map_err(|e| StoreError::Io(format!("Document read task failed: {}", e)))?;
            loaded.push(read);
        }
        loaded.sort_by_key(|(index, _, _)| *index);

        let mut snapshot = Document::new();
        let mut skipped = Vec::new();
        for (_, id, result) in loaded {
            match result {
                Ok(doc) => {
                    snapshot.insert(id.to_string(), Value::Object(doc));
                }
                Err(err) => {
                    tracing::warn!(document = %id, error = %err, "omitting document from merge");
                    skipped.push((id, err));
                }
            }
        }

        let path = self.storage.paths().snapshot_file();
        write_json_atomic(&path, &snapshot, self.storage.write_options()).await?;

        Ok(MergeReport {
            snapshot,
            skipped,
            path,
        })
    }
}
