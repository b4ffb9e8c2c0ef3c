//! Storage initialization and reset
//!
//! Handles first-run setup and the demo reset that restores the sample
//! documents and truncates the audit log.

use serde_json::json;

use crate::config::paths::StorePaths;
use crate::config::settings::Settings;
use crate::error::{StoreError, StoreResult};
use crate::models::{Document, DocumentId};

use super::Storage;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and persists settings if none exist yet.
pub fn initialize_storage(paths: &StorePaths, settings: &Settings) -> Result<(), StoreError> {
    paths.ensure_directories()?;

    if !paths.is_initialized() {
        settings.save(paths)?;
    }

    Ok(())
}

/// The sample documents written by [`reset`]
pub fn sample_documents() -> Vec<(&'static str, Document)> {
    let seed = |value: serde_json::Value| match value {
        serde_json::Value::Object(map) => map,
        _ => Document::new(),
    };

    vec![
        (
            "andrew",
            seed(json!({
                "firstname": "Andrew",
                "lastname": "Maney",
                "email": "amaney@talentpath.com",
            })),
        ),
        (
            "scott",
            seed(json!({
                "firstname": "Scott",
                "lastname": "Roberts",
                "email": "sroberts@talentpath.com",
                "username": "scoot",
            })),
        ),
        (
            "post",
            seed(json!({
                "title": "Async/Await lesson",
                "description": "How to write asynchronous JavaScript",
                "date": "July 15, 2019",
            })),
        ),
    ]
}

/// Reset the store for test and demo use
///
/// Rewrites the sample documents and truncates the audit log to its header
/// line. Other documents are left alone. The reset itself is not recorded,
/// so the log holds exactly the header afterwards.
pub async fn reset(storage: &Storage) -> StoreResult<Vec<DocumentId>> {
    let mut seeded = Vec::new();

    for (name, doc) in sample_documents() {
        let id = DocumentId::parse(name)?;
        storage.documents.save(&id, &doc).await?;
        seeded.push(id);
    }

    storage.audit.reset(&storage.settings().log_header).await?;
    tracing::info!(documents = seeded.len(), "store reset");

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        initialize_storage(&paths, &Settings::default()).unwrap();

        assert!(paths.is_initialized());
        assert!(paths.documents_dir().exists());
    }

    #[test]
    fn test_initialize_keeps_existing_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().to_path_buf());

        let custom = Settings {
            pretty_print: true,
            ..Settings::default()
        };
        custom.save(&paths).unwrap();

        initialize_storage(&paths, &Settings::default()).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.pretty_print);
    }

    #[tokio::test]
    async fn test_reset_seeds_and_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, Settings::default()).unwrap();

        storage.audit.info("old entry").await.unwrap();
        let extra = DocumentId::parse("extra").unwrap();
        storage.documents.save(&extra, &Document::new()).await.unwrap();

        let seeded = reset(&storage).await.unwrap();
        assert_eq!(seeded.len(), 3);

        let scott = storage
            .documents
            .load(&DocumentId::parse("scott").unwrap())
            .await
            .unwrap();
        assert_eq!(scott.get("username"), Some(&json!("scoot")));

        // Added documents survive a reset
        assert!(storage.documents.exists(&extra).await.unwrap());

        let log = std::fs::read_to_string(storage.audit.path()).unwrap();
        assert_eq!(log, "=== Beginning of Log ===\n");
    }
}
