//! Custom error types for docstore
//!
//! This module defines the error hierarchy for the store using thiserror.
//! The display text of every variant is what ends up in the audit log and
//! in client-visible error responses, so it is written to be read by people.

use thiserror::Error;

/// The main error type for docstore operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The document's storage is absent or unreadable
    #[error("document '{id}' does not exist or cannot be read")]
    DocumentNotFound { id: String },

    /// The document did not parse as a JSON object
    #[error("document '{id}' does not contain an object")]
    NotAnObject { id: String },

    /// The requested key is absent from the document
    #[error("invalid key '{key}' in document '{id}'")]
    KeyNotFound { id: String, key: String },

    /// Creation target already exists
    #[error("cannot create document, '{id}' already exists")]
    AlreadyExists { id: String },

    /// Deletion target does not exist
    #[error("cannot delete document, '{id}' does not exist")]
    DoesNotExist { id: String },

    /// The name cannot be used as a document ID
    #[error("invalid document id '{id}': {reason}")]
    InvalidId { id: String, reason: &'static str },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl StoreError {
    /// Create a "document not found" error
    pub fn document_not_found(id: impl Into<String>) -> Self {
        Self::DocumentNotFound { id: id.into() }
    }

    /// Create a "not an object" error
    pub fn not_an_object(id: impl Into<String>) -> Self {
        Self::NotAnObject { id: id.into() }
    }

    /// Create a "key not found" error
    pub fn key_not_found(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self::KeyNotFound {
            id: id.into(),
            key: key.into(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for docstore operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_key_not_found_error() {
        let err = StoreError::key_not_found("scott", "age");
        assert_eq!(err.to_string(), "invalid key 'age' in document 'scott'");
    }

    #[test]
    fn test_not_an_object_error() {
        let err = StoreError::not_an_object("list");
        assert_eq!(err.to_string(), "document 'list' does not contain an object");
        assert!(matches!(err, StoreError::NotAnObject { .. }));
    }

    #[test]
    fn test_lifecycle_errors() {
        let exists = StoreError::AlreadyExists { id: "post".into() };
        assert_eq!(
            exists.to_string(),
            "cannot create document, 'post' already exists"
        );

        let missing = StoreError::DoesNotExist { id: "post".into() };
        assert_eq!(
            missing.to_string(),
            "cannot delete document, 'post' does not exist"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
