//! Audit logger for the append-only audit log
//!
//! Each entry is written as one line with a single `write_all` on an
//! append-mode handle, so entries from different processes never interleave
//! within a line. Appends from one logger are serialized, which keeps the
//! file's timestamps non-decreasing for that process.

use std::path::PathBuf;

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};

use super::entry::LogEntry;

/// Handles writing entries to the audit log file
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
    /// Timestamp of the last append; held while writing
    last_timestamp: Mutex<i64>,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            last_timestamp: Mutex::new(0),
        }
    }

    /// Append one entry stamped with the current time
    pub async fn append(&self, message: &str, is_error: bool) -> StoreResult<LogEntry> {
        let mut last = self.last_timestamp.lock().await;

        // Never step backwards, even if the wall clock does
        let timestamp = Utc::now().timestamp_millis().max(*last);
        let entry = LogEntry::new(message, is_error, timestamp);

        self.write_line(&entry.render()).await?;
        *last = timestamp;

        Ok(entry)
    }

    /// Append a success entry
    pub async fn info(&self, message: &str) -> StoreResult<LogEntry> {
        self.append(message, false).await
    }

    /// Append an error entry
    pub async fn error(&self, message: &str) -> StoreResult<LogEntry> {
        self.append(message, true).await
    }

    async fn write_line(&self, line: &str) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to open audit log: {}", e)))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| StoreError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .await
            .map_err(|e| StoreError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries from the log file
    ///
    /// Returns entries in append order. Lines that are not entries (the
    /// header written by [`AuditLogger::reset`]) are skipped.
    pub async fn read_all(&self) -> StoreResult<Vec<LogEntry>> {
        let contents = match tokio::fs::read_to_string(&self.log_path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(format!("Failed to read audit log: {}", e))),
        };

        Ok(contents.lines().filter_map(LogEntry::parse_line).collect())
    }

    /// Read the most recent N entries from the log
    pub async fn read_recent(&self, count: usize) -> StoreResult<Vec<LogEntry>> {
        let all_entries = self.read_all().await?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the number of entries in the audit log
    pub async fn entry_count(&self) -> StoreResult<usize> {
        Ok(self.read_all().await?.len())
    }

    /// Truncate the log to a single header line
    pub async fn reset(&self, header: &str) -> StoreResult<()> {
        let _guard = self.last_timestamp.lock().await;

        tokio::fs::write(&self.log_path, format!("{}\n", header))
            .await
            .map_err(|e| StoreError::Io(format!("Failed to reset audit log: {}", e)))
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
