//! Storage layer for docstore
//!
//! Provides per-document JSON file storage with atomic writes, plus the
//! audit log every operation reports to.

pub mod documents;
pub mod file_io;
pub mod init;

pub use documents::DocumentRepository;
pub use file_io::{write_json_atomic, WriteOptions};
pub use init::{initialize_storage, reset};

use crate::audit::AuditLogger;
use crate::config::paths::StorePaths;
use crate::config::settings::Settings;
use crate::error::StoreResult;

/// Storage handle shared by every service
///
/// Constructed once from explicit paths so tests can point it at an
/// isolated directory.
pub struct Storage {
    paths: StorePaths,
    settings: Settings,
    pub documents: DocumentRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: StorePaths, settings: Settings) -> StoreResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            documents: DocumentRepository::new(paths.documents_dir(), write_options(&settings)),
            audit: AuditLogger::new(paths.log_file()),
            paths,
            settings,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Get the active settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Options used for every JSON file this storage writes
    pub fn write_options(&self) -> WriteOptions {
        write_options(&self.settings)
    }

    /// Record the outcome of an operation in the audit log, then return it
    ///
    /// Success is logged with the text produced by `describe`; failure is
    /// logged as an error entry carrying the error's message. If the log
    /// append fails on the success path, that failure is returned instead.
    /// On the failure path the original error wins and the append failure
    /// only reaches diagnostics.
    pub async fn record<T>(
        &self,
        outcome: StoreResult<T>,
        describe: impl FnOnce(&T) -> String,
    ) -> StoreResult<T> {
        match outcome {
            Ok(value) => {
                self.audit.info(&describe(&value)).await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(log_err) = self.audit.error(&err.to_string()).await {
                    tracing::warn!(error = %log_err, outcome = %err, "failed to append audit entry");
                }
                Err(err)
            }
        }
    }
}

fn write_options(settings: &Settings) -> WriteOptions {
    WriteOptions {
        pretty: settings.pretty_print,
        sync: settings.sync_writes,
    }
}
