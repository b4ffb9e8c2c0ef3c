use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use docstore::cli::{
    handle_doc_command, handle_log_command, handle_query_command, handle_request_command,
    DocCommands, QueryCommands, RequestArgs,
};
use docstore::config::{paths::StorePaths, settings::Settings};
use docstore::storage::{initialize_storage, reset, Storage};

#[derive(Parser)]
#[command(
    name = "docstore",
    author = "Kaylee Beyene",
    version,
    about = "File-backed JSON document store with an audit log",
    long_about = "docstore keeps named JSON objects as individual files, supports \
                  field-level edits, key queries across two documents and a \
                  whole-store merge, and records every operation in an audit log."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Document commands
    #[command(subcommand)]
    Doc(DocCommands),

    /// Cross-document queries
    #[command(subcommand)]
    Query(QueryCommands),

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Restore the sample documents and truncate the audit log
    Reset,

    /// Run a single request through the request boundary
    Request(RequestArgs),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = StorePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing docstore at: {}", paths.base_dir().display());
            initialize_storage(&paths, &settings)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'docstore reset' to load the sample documents.");
        }
        Some(Commands::Config) => {
            println!("docstore Configuration");
            println!("======================");
            println!("Data directory:      {}", paths.base_dir().display());
            println!("Documents directory: {}", paths.documents_dir().display());
            println!("Audit log:           {}", paths.log_file().display());
            println!("Snapshot file:       {}", paths.snapshot_file().display());
            println!();
            println!("Settings:");
            println!("  Pretty print: {}", settings.pretty_print);
            println!("  Sync writes:  {}", settings.sync_writes);
            println!("  Log header:   {}", settings.log_header);
        }
        Some(Commands::Doc(cmd)) => {
            let storage = Storage::new(paths, settings)?;
            handle_doc_command(&storage, cmd).await?;
        }
        Some(Commands::Query(cmd)) => {
            let storage = Storage::new(paths, settings)?;
            handle_query_command(&storage, cmd).await?;
        }
        Some(Commands::Log { limit }) => {
            let storage = Storage::new(paths, settings)?;
            handle_log_command(&storage, limit).await?;
        }
        Some(Commands::Reset) => {
            let storage = Storage::new(paths, settings)?;
            let seeded = reset(&storage).await?;
            println!("Reset complete. Seeded {} documents:", seeded.len());
            for id in &seeded {
                println!("  - {}", id);
            }
        }
        Some(Commands::Request(args)) => {
            let storage = Storage::new(paths, settings)?;
            let reply = handle_request_command(&storage, args).await?;
            if reply.is_error() {
                std::process::exit(1);
            }
        }
        None => {
            println!("docstore - file-backed JSON document store");
            println!();
            println!("Run 'docstore --help' for usage information.");
        }
    }

    Ok(())
}
