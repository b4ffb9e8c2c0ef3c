//! Document identifiers
//!
//! A document ID is the document's name without its storage extension.
//! Callers may pass either form (`scott` or `scott.json`); both refer to the
//! same document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::config::paths::DOCUMENT_EXTENSION;
use crate::error::StoreError;

/// Validated name of a stored document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    /// Parse a document ID, stripping the storage extension if present
    ///
    /// The extension is stripped once. A name that still ends in `.json`
    /// afterwards (`notes.json.json`) is rejected, since its file could not
    /// be told apart from the document `notes.json` names.
    pub fn parse(name: &str) -> Result<Self, StoreError> {
        let suffix = format!(".{}", DOCUMENT_EXTENSION);
        let stem = name.strip_suffix(suffix.as_str()).unwrap_or(name);

        Self::validate(stem).map_err(|reason| StoreError::InvalidId {
            id: name.to_string(),
            reason,
        })?;

        Ok(Self(stem.to_string()))
    }

    /// Recover a document ID from a file in the documents directory
    ///
    /// The file stem is used as-is. Returns `None` for files that are not
    /// documents (wrong extension, temporary files, unusable names).
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.extension()? != DOCUMENT_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        Self::validate(stem).ok()?;
        Some(Self(stem.to_string()))
    }

    fn validate(stem: &str) -> Result<(), &'static str> {
        if stem.is_empty() {
            return Err("name is empty");
        }
        if stem.contains(&['/', '\\', '\0'][..]) {
            return Err("name contains a path separator");
        }
        if stem.starts_with('.') {
            return Err("name must not start with '.'");
        }
        if Path::new(stem).extension().is_some_and(|ext| ext == DOCUMENT_EXTENSION) {
            return Err("name must not end in the storage extension");
        }
        Ok(())
    }

    /// The name without extension
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file name used to store this document
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, DOCUMENT_EXTENSION)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocumentId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
