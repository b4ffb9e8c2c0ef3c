//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::StoreError;

/// Options controlling how JSON files are written
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Indent the output
    pub pretty: bool,
    /// fsync the temporary file before renaming it into place
    pub sync: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            sync: true,
        }
    }
}

/// Serialize `data` to JSON text according to `options`
pub fn to_json<T: Serialize>(data: &T, options: WriteOptions) -> Result<String, StoreError> {
    let json = if options.pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    };
    json.map_err(|e| StoreError::Json(format!("Failed to serialize data: {}", e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all. Each call
/// uses its own temporary file, so concurrent writers to the same path never
/// produce a mixed file; the last rename wins.
pub async fn write_json_atomic<T, P>(path: P, data: &T, options: WriteOptions) -> Result<(), StoreError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let json = to_json(data, options)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(|e| {
            StoreError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let mut file = File::create(&temp_path)
        .await
        .map_err(|e| StoreError::Io(format!("Failed to create temp file: {}", e)))?;

    let written = async {
        file.write_all(json.as_bytes()).await?;
        file.flush().await?;
        if options.sync {
            file.sync_all().await?;
        }
        Ok::<(), std::io::Error>(())
    }
    .await;
    drop(file);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path).await;
        return Err(StoreError::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(StoreError::Io(format!(
            "Failed to rename temp file into {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4().simple()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample(), WriteOptions::default())
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, r#"{"name":"test","value":42}"#);
        let loaded: TestData = serde_json::from_str(&contents).unwrap();
        assert_eq!(loaded, sample());
    }

    #[tokio::test]
    async fn test_pretty_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let options = WriteOptions {
            pretty: true,
            sync: false,
        };

        write_json_atomic(&path, &sample(), options).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\n  \"name\": \"test\""));
    }

    #[tokio::test]
    async fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample(), WriteOptions::default())
            .await
            .unwrap();

        let names: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["test.json"]);
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample(), WriteOptions::default())
            .await
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_temp_paths_are_unique() {
        let path = Path::new("/data/documents/post.json");
        let a = temp_path_for(path);
        let b = temp_path_for(path);

        assert_ne!(a, b);
        assert_eq!(a.parent(), path.parent());
        assert!(a.file_name().unwrap().to_string_lossy().starts_with(".post.json."));
    }
}
