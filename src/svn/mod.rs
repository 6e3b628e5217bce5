//! svn log acquisition, extraction and marker filtering.

pub mod entry;
pub mod filter;
pub mod log;
pub mod source;
pub mod subprocess;

pub use entry::{LogEntry, extract_entries};
pub use filter::{DEFAULT_MARKERS, FilteredEntry, Markers, filter_entries};
pub use log::{SvnLog, SvnLogEntry, parse_log};
pub use source::{DefaultExecutor, SvnExecutor, fetch_log, fetch_log_or_none};
pub use subprocess::{check_svn_installed, run_svn_log};
