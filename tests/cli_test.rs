//! End-to-end tests for the svncl binary using pre-fetched XML logs.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn svncl() -> Command {
    let mut cmd = Command::cargo_bin("svncl").expect("svncl binary should build");
    cmd.env("RUST_LOG", "info");
    cmd
}

#[test]
fn test_writes_changelog_from_xml() {
    let dir = common::temp_test_dir();
    let output = dir.path().join("CHANGELOG.md");

    svncl()
        .arg("--xml")
        .arg(common::log_fixture("mixed.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 entries"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("# Changelog\n\n"));
    assert!(content.contains("* fix(parser): handle empty input (r14)\n"));
    assert!(content.contains("* feat: add export command (r12)\n"));
    assert!(!content.contains("(r13)"));
}

#[test]
fn test_overwrites_existing_output() {
    let dir = common::temp_test_dir();
    let output = dir.path().join("CHANGELOG.md");
    fs::write(&output, "stale content\n").unwrap();

    svncl()
        .arg("--xml")
        .arg(common::log_fixture("mixed.xml"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("stale content"));
}

#[test]
fn test_missing_xml_still_writes_header() {
    let dir = common::temp_test_dir();
    let output = dir.path().join("CHANGELOG.md");

    svncl()
        .arg("--xml")
        .arg(dir.path().join("missing.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("No log data available"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("# Changelog\n\n"));
    assert!(content.trim_end().ends_with(')'));
    assert!(!content.contains("* "));
}

#[test]
fn test_malformed_xml_does_not_crash() {
    let dir = common::temp_test_dir();
    let output = dir.path().join("CHANGELOG.md");

    svncl()
        .arg("--xml")
        .arg(common::log_fixture("malformed.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Malformed svn log XML"));

    assert!(output.exists());
}

#[test]
fn test_strict_reports_no_data() {
    let dir = common::temp_test_dir();
    let output = dir.path().join("CHANGELOG.md");

    svncl()
        .arg("--strict")
        .arg("--xml")
        .arg(dir.path().join("missing.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .code(svncl::exit_codes::NO_DATA);

    assert!(output.exists());
}

#[test]
fn test_strict_with_empty_log_succeeds() {
    let dir = common::temp_test_dir();

    svncl()
        .arg("--strict")
        .arg("--xml")
        .arg(common::log_fixture("empty.xml"))
        .arg("--output")
        .arg(dir.path().join("CHANGELOG.md"))
        .assert()
        .success();
}

#[test]
fn test_input_suppresses_existing_lines() {
    let dir = common::temp_test_dir();
    let output = dir.path().join("CHANGELOG.md");

    svncl()
        .arg("--xml")
        .arg(common::log_fixture("mixed.xml"))
        .arg("--input")
        .arg(common::changelog_fixture("previous.md"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 entry (2 already present)"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("(r14)"));
    assert!(!content.contains("(r12)"));
}

#[test]
fn test_dry_run_prints_without_writing() {
    let dir = common::temp_test_dir();
    let output = dir.path().join("CHANGELOG.md");

    svncl()
        .arg("--dry-run")
        .arg("--xml")
        .arg(common::log_fixture("mixed.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("* feat: add export command (r12)"));

    assert!(!output.exists());
}

#[test]
fn test_marker_flag_replaces_defaults() {
    let dir = common::temp_test_dir();

    svncl()
        .arg("--dry-run")
        .arg("--marker")
        .arg("docs")
        .arg("--xml")
        .arg(common::log_fixture("mixed.xml"))
        .arg("--output")
        .arg(dir.path().join("CHANGELOG.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("* docs: describe configuration (r10)"))
        .stdout(predicate::str::contains("(r12)").not());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = common::temp_test_dir();
    let output = dir.path().join("missing-dir").join("CHANGELOG.md");

    svncl()
        .arg("--xml")
        .arg(common::log_fixture("mixed.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .code(svncl::exit_codes::ERROR)
        .stderr(predicate::str::contains("Failed to write"));
}
