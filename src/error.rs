//! Error types for svncl modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from invoking the svn command line client.
#[derive(Error, Debug)]
pub enum SvnError {
    #[error("svn command line client not found. Install Subversion or pass --xml <file>")]
    NotInstalled,

    #[error("Failed to spawn svn process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("svn exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("svn log timed out after {0} seconds")]
    Timeout(u64),
}

/// Errors from acquiring or parsing the structured log.
///
/// All of these are recoverable: the pipeline logs them and continues
/// with an empty log.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Log file does not exist: {}", .0.display())]
    SourceUnavailable(PathBuf),

    #[error("Failed to read log file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error(transparent)]
    Command(#[from] SvnError),

    #[error("Malformed svn log XML: {0}")]
    MalformedInput(String),
}

/// Errors from changelog operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Failed to replace {}: {source}", path.display())]
    PersistFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
