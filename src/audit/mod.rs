//! Audit logging system for docstore
//!
//! Every document store operation records its outcome, success or failure,
//! as one line in an append-only plain-text log.
//!
//! # Architecture
//!
//! - `LogEntry`: a single entry with message, error flag and millisecond
//!   timestamp, rendered as `"<ERROR: >?<message> | <timestamp>"`.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use docstore::audit::AuditLogger;
//!
//! let logger = AuditLogger::new(paths.log_file());
//! logger.info("Successfully created 'post'").await?;
//! logger.error("cannot delete document, 'nope' does not exist").await?;
//! ```

mod entry;
mod logger;

pub use entry::LogEntry;
pub use logger::AuditLogger;
