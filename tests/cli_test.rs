use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_application() {
    Command::cargo_bin("finance")
        .unwrap()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal finance manager"));
}

#[test]
fn test_version() {
    Command::cargo_bin("finance")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_rejects_unknown_flags() {
    Command::cargo_bin("finance")
        .unwrap()
        .arg("--output")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
