//! Render and write changelog text.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ChangelogError;
use crate::svn::FilteredEntry;

use super::format::{CHANGELOG_HEADER, format_bullet, format_section_header};
use super::parser::PriorChangelog;

/// Rendered changelog text plus bookkeeping for the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChangelog {
    pub text: String,
    /// Bullets written to the new section.
    pub written: usize,
    /// Entries skipped because the same line was already present.
    pub suppressed: usize,
}

/// Render header, dated section and one bullet per entry in input order.
///
/// Bullets present verbatim in `prior` are left out, as are repeats of a
/// bullet already rendered earlier in this run.
pub fn render_changelog(
    entries: &[FilteredEntry],
    prior: Option<&PriorChangelog>,
    date: NaiveDate,
) -> RenderedChangelog {
    let mut text = String::from(CHANGELOG_HEADER);
    text.push_str(&format_section_header(date));

    let mut seen: HashSet<String> = HashSet::new();
    let mut written = 0;
    let mut suppressed = 0;

    for entry in entries {
        let bullet = format_bullet(entry);

        if prior.is_some_and(|p| p.contains(&bullet)) || seen.contains(&bullet) {
            debug!("Suppressing repeated entry: {}", bullet);
            suppressed += 1;
            continue;
        }

        text.push_str(&bullet);
        text.push('\n');
        seen.insert(bullet);
        written += 1;
    }

    RenderedChangelog {
        text,
        written,
        suppressed,
    }
}

/// Write changelog text to `path`, replacing any existing file.
///
/// The text goes to a temporary file in the destination directory first
/// and is then renamed over `path`, so a failed run never leaves a
/// truncated changelog behind.
pub fn write_changelog(path: &Path, text: &str) -> Result<(), ChangelogError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(ChangelogError::WriteFailed)?;
    tmp.write_all(text.as_bytes()).map_err(ChangelogError::WriteFailed)?;
    tmp.flush().map_err(ChangelogError::WriteFailed)?;

    tmp.persist(path)
        .map_err(|e| ChangelogError::PersistFailed {
            path: path.to_path_buf(),
            source: e.error,
        })?;

    Ok(())
}

/// Generate a summary message for the user.
pub fn generate_summary(rendered: &RenderedChangelog, path: &Path) -> String {
    let entry_word = if rendered.written == 1 { "entry" } else { "entries" };

    if rendered.suppressed == 0 {
        format!("Wrote {} {} to {}", rendered.written, entry_word, path.display())
    } else {
        format!(
            "Wrote {} {} ({} already present) to {}",
            rendered.written,
            entry_word,
            rendered.suppressed,
            path.display()
        )
    }
}
