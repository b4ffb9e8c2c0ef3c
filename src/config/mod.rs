//! Configuration module for docstore
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::StorePaths;
pub use settings::Settings;
