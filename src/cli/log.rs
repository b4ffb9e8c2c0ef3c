//! Audit log CLI command

use crate::display::format_log_entries;
use crate::error::StoreResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub async fn handle_log_command(storage: &Storage, limit: usize) -> StoreResult<()> {
    let entries = storage.audit.read_recent(limit).await?;
    print!("{}", format_log_entries(&entries));

    let total = storage.audit.entry_count().await?;
    if total > entries.len() {
        println!("\nShowing {} of {} entries", entries.len(), total);
    }

    Ok(())
}
