//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod document;
pub mod log;
pub mod query;
pub mod request;

pub use document::{handle_doc_command, DocCommands};
pub use log::handle_log_command;
pub use query::{handle_query_command, QueryCommands};
pub use request::{handle_request_command, RequestArgs};
