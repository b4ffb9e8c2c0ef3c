//! Core data models for docstore
//!
//! Documents are plain JSON objects; the only dedicated type is the
//! validated document identifier.

pub mod document;
pub mod ids;

pub use document::{describe_value, has_truthy, is_truthy, parse_document, Document};
pub use ids::DocumentId;
