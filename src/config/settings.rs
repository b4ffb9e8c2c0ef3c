//! User settings for docstore
//!
//! Manages how documents are written and how the audit log is reset.

use serde::{Deserialize, Serialize};

use super::paths::StorePaths;
use crate::error::StoreError;

/// Header line written to a freshly reset audit log
pub const DEFAULT_LOG_HEADER: &str = "=== Beginning of Log ===";

/// User settings for docstore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Write document files as indented JSON instead of compact JSON
    #[serde(default)]
    pub pretty_print: bool,

    /// Flush document files to disk before they replace the previous version
    #[serde(default = "default_sync_writes")]
    pub sync_writes: bool,

    /// First line of the audit log after a reset
    #[serde(default = "default_log_header")]
    pub log_header: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_sync_writes() -> bool {
    true
}

fn default_log_header() -> String {
    DEFAULT_LOG_HEADER.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            pretty_print: false,
            sync_writes: default_sync_writes(),
            log_header: default_log_header(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &StorePaths) -> Result<Self, StoreError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| StoreError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StoreError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StorePaths) -> Result<(), StoreError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| StoreError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
