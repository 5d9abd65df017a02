//! Binary tests for the scripted subcommands

use super::common::fixtures::TestDataDir;
use assert_cmd::Command;
use predicates::prelude::*;

fn roster(data: &TestDataDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--data-dir").arg(data.dir.path());
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("roster")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("edit"));
}

#[test]
fn test_add_list_edit() {
    let data = TestDataDir::new();

    roster(&data)
        .args([
            "add",
            "--name",
            "Alice",
            "--employee-id",
            "42",
            "--city",
            "Tokyo",
            "--female",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved: Name: Alice"));

    roster(&data)
        .args(["edit", "Alice", "--city", "London"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: Name: Alice, Employee ID: 42, City: London"));

    roster(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::eq(
            "Name: Alice, Employee ID: 42, City: London, Gender: Female\n",
        ));

    roster(&data)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"employeeId\": \"42\""));

    assert!(data.dir.path().join("config.toml").exists());
    assert!(data.dir.path().join("logs").join("roster.log").exists());
}

#[test]
fn test_add_invalid_exits_nonzero() {
    let data = TestDataDir::new();

    roster(&data)
        .args(["add", "--name", "Alice", "--employee-id", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select your city."))
        .stderr(predicate::str::contains("Please select your gender."));

    roster(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved records"));
}

#[test]
fn test_edit_unknown_name_fails() {
    let data = TestDataDir::new();

    roster(&data)
        .args(["edit", "Nobody", "--city", "Tokyo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no saved record named 'Nobody'"));
}

#[test]
fn test_non_numeric_employee_id_rejected() {
    let data = TestDataDir::new();

    roster(&data)
        .args(["add", "--name", "Alice", "--employee-id", "A1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("digits only"));
}
