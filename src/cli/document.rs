//! Document CLI commands
//!
//! Implements CLI commands for reading and editing individual documents.

use clap::Subcommand;
use serde_json::Value;

use crate::display::{format_document, format_document_list};
use crate::error::{StoreError, StoreResult};
use crate::models::{describe_value, Document};
use crate::services::DocumentService;
use crate::storage::Storage;

/// Document subcommands
#[derive(Subcommand)]
pub enum DocCommands {
    /// List all documents
    List,
    /// Print the value stored under a key
    Get {
        /// Document name
        file: String,
        /// Key to look up
        key: String,
    },
    /// Print a whole document
    Read {
        /// Document name
        file: String,
    },
    /// Set a key in a document
    Set {
        /// Document name
        file: String,
        /// Key to set
        key: String,
        /// New value
        value: String,
        /// Parse the value as JSON instead of storing it as a string
        #[arg(long)]
        json: bool,
    },
    /// Remove a key from a document
    Remove {
        /// Document name
        file: String,
        /// Key to remove
        key: String,
    },
    /// Create a new document
    Create {
        /// Document name
        file: String,
        /// Initial contents as a JSON object
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Delete a document
    Delete {
        /// Document name
        file: String,
    },
}

/// Parse the `--data` argument of `doc create`
fn parse_initial(raw: Option<&str>) -> StoreResult<Document> {
    let Some(raw) = raw else {
        return Ok(Document::new());
    };

    match serde_json::from_str::<Value>(raw)? {
        Value::Object(doc) => Ok(doc),
        _ => Err(StoreError::Json(
            "initial contents must be a JSON object".to_string(),
        )),
    }
}

/// Handle a document command
pub async fn handle_doc_command(storage: &Storage, cmd: DocCommands) -> StoreResult<()> {
    let service = DocumentService::new(storage);

    match cmd {
        DocCommands::List => {
            let ids = service.list().await?;
            print!("{}", format_document_list(&ids));
        }

        DocCommands::Get { file, key } => {
            let value = service.get(&file, &key).await?;
            println!("{}", describe_value(&value));
        }

        DocCommands::Read { file } => {
            let doc = service.read(&file).await?;
            print!("{}", format_document(&doc));
        }

        DocCommands::Set {
            file,
            key,
            value,
            json,
        } => {
            let value = if json {
                serde_json::from_str(&value)?
            } else {
                Value::String(value)
            };

            service.set(&file, &key, value).await?;
            println!("Value set");
        }

        DocCommands::Remove { file, key } => {
            service.remove(&file, &key).await?;
            println!("Value removed");
        }

        DocCommands::Create { file, data } => {
            let initial = parse_initial(data.as_deref())?;
            service.create_with(&file, initial).await?;
            println!("Created document: {}", file);
        }

        DocCommands::Delete { file } => {
            service.delete(&file).await?;
            println!("Deleted document: {}", file);
        }
    }

    Ok(())
}
