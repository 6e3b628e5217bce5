//! Read a previously generated changelog for repeat-suppression.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::ChangelogError;

/// Matches a rendered bullet: `* <message> (r<revision>)`.
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\* .* \(r[^\s()]+\)$").expect("bullet pattern is valid"));

/// Bullet lines found in a prior changelog.
#[derive(Debug, Default, Clone)]
pub struct PriorChangelog {
    bullets: HashSet<String>,
}

impl PriorChangelog {
    /// Collect bullet lines from changelog text.
    ///
    /// Lines are compared after trimming trailing whitespace, so CRLF files
    /// match LF output.
    pub fn from_content(content: &str) -> Self {
        let bullets = content
            .lines()
            .map(str::trim_end)
            .filter(|line| BULLET_RE.is_match(line))
            .map(str::to_string)
            .collect();
        Self { bullets }
    }

    /// Whether `line` (without its newline) already appears verbatim.
    pub fn contains(&self, line: &str) -> bool {
        self.bullets.contains(line)
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }
}

/// Read a prior changelog file.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn read_changelog(path: &Path) -> Result<Option<PriorChangelog>, ChangelogError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(ChangelogError::ReadFailed)?;
    Ok(Some(PriorChangelog::from_content(&content)))
}
