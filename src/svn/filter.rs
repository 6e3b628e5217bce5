//! Marker keyword filtering.

use tracing::debug;

use super::entry::LogEntry;

/// Marker keywords used when none are configured.
pub const DEFAULT_MARKERS: [&str; 2] = ["feat", "fix"];

/// Set of marker substrings that qualify a commit for the changelog.
///
/// Matching is a case-sensitive substring test with no word boundary:
/// `"fixup"` and `"defix"` both match `"fix"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers(Vec<String>);

impl Markers {
    /// Build a marker set, dropping empty strings and duplicates.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for marker in markers.into_iter().map(Into::into) {
            if !marker.is_empty() && !set.contains(&marker) {
                set.push(marker);
            }
        }
        Self(set)
    }

    /// Whether `message` contains any marker.
    pub fn matches(&self, message: &str) -> bool {
        self.0.iter().any(|marker| message.contains(marker.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS)
    }
}

/// A log entry selected for the changelog, reduced to its first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEntry {
    pub revision: String,
    pub message: String,
}

impl FilteredEntry {
    /// Truncate `entry`'s message at the first line break.
    fn from_log_entry(entry: LogEntry) -> Self {
        let message = first_line(&entry.message).to_string();
        Self {
            revision: entry.revision,
            message,
        }
    }
}

/// Text before the first `\n` or `\r`.
pub fn first_line(message: &str) -> &str {
    message
        .split(['\n', '\r'])
        .next()
        .unwrap_or_default()
}

/// Keep entries whose message matches a marker, in input order.
///
/// Markers are tested against the whole message before truncation, so a
/// commit whose marker only appears in its body still qualifies. Such an
/// entry is dropped if its first line no longer carries a marker.
pub fn filter_entries(entries: Vec<LogEntry>, markers: &Markers) -> Vec<FilteredEntry> {
    let total = entries.len();

    let kept: Vec<FilteredEntry> = entries
        .into_iter()
        .filter(|entry| markers.matches(&entry.message))
        .map(FilteredEntry::from_log_entry)
        .filter(|entry| markers.matches(&entry.message))
        .collect();

    debug!(
        "Kept {} of {} entries matching markers {:?}",
        kept.len(),
        total,
        markers.as_slice()
    );
    kept
}
