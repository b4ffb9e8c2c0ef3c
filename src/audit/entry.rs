//! Audit entry data structures
//!
//! Each entry renders as one line of the plain-text log:
//!
//! ```text
//! scott successfully set email to be new@example.com | 1563221866619
//! ERROR: document 'nope' does not exist or cannot be read | 1563221866702
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

const ERROR_PREFIX: &str = "ERROR: ";
const TIMESTAMP_SEPARATOR: &str = " | ";

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Human-readable description of the outcome (always a single line)
    pub message: String,

    /// Whether the outcome was a failure
    pub is_error: bool,

    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl LogEntry {
    /// Create an entry; line breaks in `message` are escaped so the entry
    /// stays on one line
    pub fn new(message: impl Into<String>, is_error: bool, timestamp: i64) -> Self {
        let message: String = message.into();
        let message = if message.contains(&['\n', '\r'][..]) {
            message.replace('\r', "\\r").replace('\n', "\\n")
        } else {
            message
        };

        Self {
            message,
            is_error,
            timestamp,
        }
    }

    /// Render the entry as a log line, including the trailing newline
    pub fn render(&self) -> String {
        format!("{}\n", self)
    }

    /// Parse a line previously produced by [`LogEntry::render`]
    ///
    /// Returns `None` for lines that are not entries, such as the header.
    ///
    /// The line format has no escape for a leading `ERROR: `, so a success
    /// entry whose message itself starts with that prefix (a `get` of the
    /// string `"ERROR: x"`) reads back as an error entry. The file on disk
    /// is still exactly what was appended.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        let (body, timestamp) = line.rsplit_once(TIMESTAMP_SEPARATOR)?;
        let timestamp = timestamp.parse::<i64>().ok()?;

        let (is_error, message) = match body.strip_prefix(ERROR_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, body),
        };

        Some(Self {
            message: message.to_string(),
            is_error,
            timestamp,
        })
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error {
            f.write_str(ERROR_PREFIX)?;
        }
        write!(f, "{}{}{}", self.message, TIMESTAMP_SEPARATOR, self.timestamp)
    }
}
