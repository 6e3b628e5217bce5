//! Changelog text layout.

use chrono::NaiveDate;

use crate::svn::FilteredEntry;

/// Header written at the top of every generated changelog.
pub const CHANGELOG_HEADER: &str = "# Changelog\n\n\
All notable changes to this project will be documented in this file. \
See [standard-version](https://github.com/conventional-changelog/standard-version) \
for commit guideline.\n\n";

/// Format the dated section header, e.g. `## (2024-01-01)`.
pub fn format_section_header(date: NaiveDate) -> String {
    format!("## ({})\n\n", date.format("%Y-%m-%d"))
}

/// Format one bullet line without its trailing newline.
pub fn format_bullet(entry: &FilteredEntry) -> String {
    format!("* {} (r{})", entry.message, entry.revision)
}
