//! Audit log display formatting

use chrono::{TimeZone, Utc};

use crate::audit::LogEntry;

/// Format audit entries as a table with readable times
pub fn format_log_entries(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<23}  {:<6}  {}\n", "Time (UTC)", "Status", "Message"));
    output.push_str(&format!("{:-<23}  {:-<6}  {:-<7}\n", "", "", ""));

    for entry in entries {
        output.push_str(&format!(
            "{:<23}  {:<6}  {}\n",
            format_timestamp(entry.timestamp),
            if entry.is_error { "ERROR" } else { "ok" },
            entry.message,
        ));
    }

    output
}

/// Render a millisecond timestamp as a UTC date-time, or the raw number if
/// it is out of range
pub fn format_timestamp(timestamp_ms: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        None => timestamp_ms.to_string(),
    }
}
