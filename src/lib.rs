//! docstore - file-backed JSON document store with an audit log
//!
//! This library provides a small persistent store of named JSON objects, one
//! file per document. Documents support field-level reads and edits,
//! two-document key queries and a whole-store merge. Every operation,
//! successful or not, is recorded as one line in a human-readable audit log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and settings
//! - `error`: Custom error types
//! - `models`: Document IDs, document contents and truthiness
//! - `storage`: Document files, atomic writes and reset
//! - `audit`: The append-only audit log
//! - `services`: Store operations (documents, key queries, merge)
//! - `api`: Request boundary mapping operations to status codes
//! - `cli`: Command handlers for the `docstore` binary
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use docstore::config::{paths::StorePaths, settings::Settings};
//! use docstore::services::DocumentService;
//! use docstore::storage::Storage;
//!
//! let paths = StorePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, settings)?;
//!
//! let title = DocumentService::new(&storage).get("post", "title").await?;
//! ```

pub mod api;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{StoreError, StoreResult};
