//! Integration tests for the grg binary
//!
//! Network-touching paths are covered by unit tests with a scripted process
//! runner; these tests only exercise behaviors that stay on the local machine.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn no_arguments_shows_help_and_exits_zero() {
    Command::cargo_bin("grg")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("REPOSITORY"));
}

#[test]
fn help_flag_documents_verbose() {
    Command::cargo_bin("grg")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("grg")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grg"));
}

#[test]
fn invalid_identifier_is_reported_not_fatal() {
    // No slash means no clone is attempted; the identifier lands in the
    // error section and the exit status is non-zero.
    Command::cargo_bin("grg")
        .unwrap()
        .arg("not-an-identifier")
        .assert()
        .failure()
        .stdout(predicate::str::contains("The following errors were found:"))
        .stdout(predicate::str::contains(
            "not-an-identifier: invalid repository identifier",
        ));
}
