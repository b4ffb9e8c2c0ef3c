//! Service layer for docstore
//!
//! The service layer is the document store's public operation set. Each
//! operation computes its result against the storage layer, records the
//! outcome in the audit log, and returns it.

pub mod document;
pub mod keyset;
pub mod merge;

pub use document::DocumentService;
pub use keyset::{difference_keys, intersect_keys, union_keys, KeySetService};
pub use merge::{MergeReport, MergeService};
