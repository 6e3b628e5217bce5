//! The changelog pipeline: fetch, extract, filter, render.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::changelog::{PriorChangelog, RenderedChangelog, read_changelog, render_changelog};
use crate::svn::{Markers, SvnExecutor, extract_entries, fetch_log_or_none, filter_entries};

/// Inputs for one changelog run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Working copy or URL passed to `svn log`.
    pub repo_path: PathBuf,
    /// Pre-fetched `svn log --xml` output; bypasses svn when set.
    pub xml_file: Option<PathBuf>,
    /// Previous changelog used for repeat-suppression.
    pub prior_changelog: Option<PathBuf>,
    pub markers: Markers,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            xml_file: None,
            prior_changelog: None,
            markers: Markers::default(),
        }
    }
}

/// Outcome of a run, before anything is written.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub changelog: RenderedChangelog,
    /// False when the log could not be fetched or parsed.
    pub log_available: bool,
    pub extracted: usize,
    pub filtered: usize,
}

/// Run the pipeline for `date`.
///
/// Never fails: an unavailable or malformed log produces a changelog with
/// only the header and dated section, and an unreadable prior changelog
/// disables repeat-suppression.
pub async fn generate<E: SvnExecutor + ?Sized>(
    options: &GenerateOptions,
    executor: &E,
    date: NaiveDate,
) -> GenerateReport {
    let log = fetch_log_or_none(&options.repo_path, options.xml_file.as_deref(), executor).await;
    let log_available = log.is_some();

    let entries = extract_entries(log.as_ref());
    let extracted = entries.len();

    let filtered_entries = filter_entries(entries, &options.markers);
    let filtered = filtered_entries.len();
    info!("Found {} matching entries in {} revisions", filtered, extracted);

    let prior = options.prior_changelog.as_deref().and_then(load_prior);
    let changelog = render_changelog(&filtered_entries, prior.as_ref(), date);

    GenerateReport {
        changelog,
        log_available,
        extracted,
        filtered,
    }
}

/// Load the prior changelog, logging and ignoring any failure.
fn load_prior(path: &Path) -> Option<PriorChangelog> {
    match read_changelog(path) {
        Ok(Some(prior)) if prior.is_empty() => {
            warn!(
                "Input changelog {} has no entry lines; nothing to suppress",
                path.display()
            );
            Some(prior)
        }
        Ok(Some(prior)) => {
            debug!("Loaded {} existing bullets from {}", prior.len(), path.display());
            Some(prior)
        }
        Ok(None) => {
            warn!(
                "Input changelog {} does not exist; repeat-suppression disabled",
                path.display()
            );
            None
        }
        Err(e) => {
            warn!("{}; repeat-suppression disabled", e);
            None
        }
    }
}
