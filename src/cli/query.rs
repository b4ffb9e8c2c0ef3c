//! Query CLI commands
//!
//! Cross-document queries: the merged snapshot and key-set algebra.

use clap::Subcommand;

use crate::display::{format_document, format_keys};
use crate::error::StoreResult;
use crate::services::{KeySetService, MergeService};
use crate::storage::Storage;

/// Query subcommands
#[derive(Subcommand)]
pub enum QueryCommands {
    /// Merge every document into the snapshot file and print it
    Merge,
    /// Keys present in either document
    Union {
        /// First document
        file_a: String,
        /// Second document
        file_b: String,
    },
    /// Keys truthy in both documents
    Intersect {
        /// First document
        file_a: String,
        /// Second document
        file_b: String,
    },
    /// Keys truthy in exactly one document
    Difference {
        /// First document
        file_a: String,
        /// Second document
        file_b: String,
    },
}

/// Handle a query command
pub async fn handle_query_command(storage: &Storage, cmd: QueryCommands) -> StoreResult<()> {
    let keyset = KeySetService::new(storage);

    match cmd {
        QueryCommands::Merge => {
            let report = MergeService::new(storage).merge_all().await?;
            print!("{}", format_document(&report.snapshot));

            for (id, err) in &report.skipped {
                eprintln!("Skipped '{}': {}", id, err);
            }
            eprintln!("Snapshot written to {}", report.path.display());
        }

        QueryCommands::Union { file_a, file_b } => {
            let keys = keyset.union(&file_a, &file_b).await?;
            print!("{}", format_keys(&keys));
        }

        QueryCommands::Intersect { file_a, file_b } => {
            let keys = keyset.intersect(&file_a, &file_b).await?;
            print!("{}", format_keys(&keys));
        }

        QueryCommands::Difference { file_a, file_b } => {
            let keys = keyset.difference(&file_a, &file_b).await?;
            print!("{}", format_keys(&keys));
        }
    }

    Ok(())
}
