//! svncl - A CLI tool that generates a changelog from svn log history.
//!
//! # Overview
//!
//! svncl reads `svn log --xml` output (from the svn client or a saved file),
//! keeps the commits whose messages carry a marker keyword such as `feat` or
//! `fix`, and writes them as a dated section of bullet points to
//! CHANGELOG.md. Lines already present in a previous changelog can be
//! suppressed.

pub mod changelog;
pub mod error;
pub mod exit_codes;
pub mod pipeline;
pub mod svn;

// Re-export commonly used types
pub use changelog::{PriorChangelog, RenderedChangelog};
pub use error::{ChangelogError, LogError, SvnError};
pub use pipeline::{GenerateOptions, GenerateReport, generate};
pub use svn::{FilteredEntry, LogEntry, Markers, SvnLog};
