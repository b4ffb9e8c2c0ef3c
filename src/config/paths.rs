//! Path management for docstore
//!
//! Provides path resolution for documents, the audit log, and the merge
//! snapshot.
//!
//! ## Path Resolution Order
//!
//! 1. `DOCSTORE_DATA_DIR` environment variable (if set)
//! 2. The platform data directory for `docstore` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::StoreError;

/// Extension given to every document file on disk
pub const DOCUMENT_EXTENSION: &str = "json";

/// Manages all paths used by docstore
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Base directory for all docstore data
    base_dir: PathBuf,
}

impl StorePaths {
    /// Create a new StorePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined and
    /// `DOCSTORE_DATA_DIR` is unset.
    pub fn new() -> Result<Self, StoreError> {
        let base_dir = if let Ok(custom) = std::env::var("DOCSTORE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StorePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory holding one file per document
    pub fn documents_dir(&self) -> PathBuf {
        self.base_dir.join("documents")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("log.txt")
    }

    /// Get the path of the composite snapshot written by merges
    ///
    /// Lives outside the documents directory so a merge never picks up its
    /// own output.
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join("merged.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StoreError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.documents_dir()).map_err(|e| {
            StoreError::Io(format!("Failed to create documents directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if docstore has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, StoreError> {
    ProjectDirs::from("", "", "docstore")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            StoreError::Config(
                "Could not determine a data directory; set DOCSTORE_DATA_DIR".into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.documents_dir(), temp_dir.path().join("documents"));
        assert_eq!(paths.log_file(), temp_dir.path().join("log.txt"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("DOCSTORE_DATA_DIR", custom_path);

        let paths = StorePaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("DOCSTORE_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.documents_dir().exists());
    }

    #[test]
    fn test_snapshot_outside_documents_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.snapshot_file().starts_with(paths.documents_dir()));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }
}
