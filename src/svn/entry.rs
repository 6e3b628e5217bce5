//! Flattening of the structured log into canonical entries.

use tracing::{debug, warn};

use super::log::SvnLog;

/// A single revision with its full commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub revision: String,
    pub message: String,
}

/// Extract one `LogEntry` per `<logentry>`, preserving input order.
///
/// `None` (no log data) yields an empty list. Records without a revision
/// cannot be rendered and are skipped; a missing `<msg>` becomes an empty
/// message.
pub fn extract_entries(log: Option<&SvnLog>) -> Vec<LogEntry> {
    let Some(log) = log else {
        return Vec::new();
    };

    let entries: Vec<LogEntry> = log
        .entries
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| match raw.revision() {
            Some(revision) => Some(LogEntry {
                revision: revision.to_string(),
                message: raw.msg.clone().unwrap_or_default(),
            }),
            None => {
                warn!("Skipping log entry #{} without a revision", index + 1);
                None
            }
        })
        .collect();

    debug!("Extracted {} log entries", entries.len());
    entries
}
