//! Acquisition of the structured log from a file or from `svn log`.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::{LogError, SvnError};

use super::log::{SvnLog, parse_log};
use super::subprocess::run_svn_log;

/// Trait for executing `svn log --xml`.
///
/// This abstraction allows mocking the svn subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SvnExecutor: Send + Sync {
    /// Return the raw XML log for the working copy or URL at `path`.
    async fn log_xml(&self, path: &Path) -> Result<String, SvnError>;
}

/// Executor that calls the real svn client.
pub struct DefaultExecutor;

#[async_trait]
impl SvnExecutor for DefaultExecutor {
    async fn log_xml(&self, path: &Path) -> Result<String, SvnError> {
        run_svn_log(path).await
    }
}

/// Fetch and parse the structured log.
///
/// With `xml_file`, the file is read and parsed and svn is never invoked.
/// Without it, `svn log <repo_path> --xml` is run through `executor`.
pub async fn fetch_log<E: SvnExecutor + ?Sized>(
    repo_path: &Path,
    xml_file: Option<&Path>,
    executor: &E,
) -> Result<SvnLog, LogError> {
    let xml = match xml_file {
        Some(file) => {
            if !file.exists() {
                return Err(LogError::SourceUnavailable(file.to_path_buf()));
            }
            debug!("Using input xml file {}", file.display());
            std::fs::read_to_string(file).map_err(LogError::ReadFailed)?
        }
        None => {
            info!("Generating xml from svn log for {}", repo_path.display());
            executor.log_xml(repo_path).await?
        }
    };

    parse_log(&xml)
}

/// Fetch the structured log, downgrading every failure to "no data".
///
/// Missing files, svn failures and malformed XML are all logged as
/// warnings; the caller continues with `None` and renders an empty
/// changelog.
pub async fn fetch_log_or_none<E: SvnExecutor + ?Sized>(
    repo_path: &Path,
    xml_file: Option<&Path>,
    executor: &E,
) -> Option<SvnLog> {
    match fetch_log(repo_path, xml_file, executor).await {
        Ok(log) => {
            debug!("Structured log has {} entries", log.entries.len());
            Some(log)
        }
        Err(e) => {
            warn!("No log data available: {}", e);
            None
        }
    }
}
