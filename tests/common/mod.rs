//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use svncl::SvnError;
use svncl::svn::SvnExecutor;

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to an `svn log --xml` fixture.
pub fn log_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("logs").join(name)
}

/// Get the path to a changelog fixture.
pub fn changelog_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("changelogs").join(name)
}

/// Read a fixture file as a string.
pub fn read_fixture(path: PathBuf) -> String {
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Build `svn log --xml` output from `(revision, message)` pairs.
pub fn svn_log_xml(entries: &[(&str, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<log>\n");
    for (revision, message) in entries {
        xml.push_str(&format!(
            "<logentry\n   revision=\"{}\">\n<author>tester</author>\n<date>2024-01-01T00:00:00.000000Z</date>\n<msg>{}</msg>\n</logentry>\n",
            revision,
            escape(message)
        ));
    }
    xml.push_str("</log>\n");
    xml
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Executor that replays canned svn output.
pub struct FakeSvn {
    response: Result<String, (i32, String)>,
}

impl FakeSvn {
    pub fn with_log(xml: impl Into<String>) -> Self {
        Self {
            response: Ok(xml.into()),
        }
    }

    pub fn failing(code: i32, stderr: &str) -> Self {
        Self {
            response: Err((code, stderr.to_string())),
        }
    }
}

#[async_trait]
impl SvnExecutor for FakeSvn {
    async fn log_xml(&self, _path: &Path) -> Result<String, SvnError> {
        match &self.response {
            Ok(xml) => Ok(xml.clone()),
            Err((code, stderr)) => Err(SvnError::NonZeroExit {
                code: *code,
                stderr: stderr.clone(),
            }),
        }
    }
}
