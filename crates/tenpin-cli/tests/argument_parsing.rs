//! Focused CLI argument parsing tests.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

fn tenpin() -> Command {
    let mut cmd = Command::cargo_bin("tenpin").unwrap();
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

#[test]
fn version_command_succeeds() {
    tenpin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tenpin"));
}

#[test]
fn version_flag_shows_version() {
    tenpin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tenpin"));
}

#[test]
fn no_command_shows_help() {
    tenpin()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn score_requires_pins() {
    tenpin()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_non_numeric_pins() {
    tenpin()
        .args(["score", "five"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn score_help_shows_options() {
    tenpin()
        .args(["score", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--pad"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn unknown_format_is_rejected() {
    let temp = tempfile::TempDir::new().unwrap();

    tenpin()
        .args(["score", "1", "--format", "xml", "-p"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}
