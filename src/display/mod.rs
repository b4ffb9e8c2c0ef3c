//! Display formatting for terminal output

pub mod document;
pub mod log;

pub use document::{format_document, format_document_list, format_keys};
pub use log::{format_log_entries, format_timestamp};
