//! Integration tests for CLI surface and argument handling

mod common;

use common::buildref;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    buildref()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("record"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_version_flag() {
    buildref()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("buildref"));
}

#[test]
fn test_hidden_version_command() {
    buildref()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Build info:"));
}

#[test]
fn test_status_requires_prefix() {
    buildref().arg("status").assert().failure();
}

#[test]
fn test_record_requires_commit_or_source_dir() {
    buildref()
        .arg("record")
        .args(["--prefix", "/tmp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_unknown_command_fails() {
    buildref().arg("upgrade").assert().failure();
}

#[test]
fn test_completions_bash() {
    buildref()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buildref"));
}

#[test]
fn test_completions_zsh() {
    buildref()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_buildref"));
}

#[test]
fn test_completions_unknown_shell() {
    buildref()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}
