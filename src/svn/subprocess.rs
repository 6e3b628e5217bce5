//! svn CLI spawning.

use std::env;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::SvnError;

/// Default timeout for `svn log` execution (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable to override the default timeout.
const TIMEOUT_ENV_VAR: &str = "SVNCL_SVN_TIMEOUT";

/// Get the configured timeout duration.
///
/// Reads from SVNCL_SVN_TIMEOUT if set, otherwise uses the default of
/// 120 seconds. Invalid values are logged and ignored.
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

/// Check that the `svn` executable is on PATH.
pub fn check_svn_installed() -> Result<(), SvnError> {
    which::which("svn").map(|_| ()).map_err(|_| SvnError::NotInstalled)
}

/// Run `svn log <path> --xml` and return its stdout.
///
/// The subprocess is bounded by the timeout from `SVNCL_SVN_TIMEOUT`.
/// There are no retries; any failure is reported once.
pub async fn run_svn_log(path: &Path) -> Result<String, SvnError> {
    check_svn_installed()?;

    let timeout_duration = get_timeout();
    debug!(
        "Running svn log {} --xml (timeout {}s)",
        path.display(),
        timeout_duration.as_secs()
    );

    let mut command = Command::new("svn");
    command
        .arg("log")
        .arg(path)
        .arg("--xml")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    run_with_timeout(command, timeout_duration).await
}

/// Run a prepared command, mapping exit status and timeout to `SvnError`.
async fn run_with_timeout(mut command: Command, limit: Duration) -> Result<String, SvnError> {
    let output = timeout(limit, command.output())
        .await
        .map_err(|_| SvnError::Timeout(limit.as_secs()))?
        .map_err(SvnError::SpawnFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        return Err(SvnError::NonZeroExit { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
