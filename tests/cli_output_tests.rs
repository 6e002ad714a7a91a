//! CLI output integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs `odds` with an empty home directory so no user config is picked up.
fn odds(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("odds");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn home() -> TempDir {
    tempfile::tempdir().expect("temp home")
}

#[test]
fn test_help() {
    let home = home();
    odds(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("odds"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version() {
    let home = home();
    odds(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("odds"));
}

#[test]
fn test_fraction_table() {
    let home = home();
    odds(&home)
        .arg("9/4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type"))
        .stdout(predicate::str::contains("Reciprocal Implied Probability"))
        .stdout(predicate::str::contains("3.25"))
        .stdout(predicate::str::contains("+225"))
        .stdout(predicate::str::contains("30.77%"))
        .stdout(predicate::str::contains("4/9"))
        .stdout(predicate::str::contains("-225"))
        .stdout(predicate::str::contains("69.23%"));
}

#[test]
fn test_decimal_input() {
    let home = home();
    odds(&home)
        .arg("1.5")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.50"))
        .stdout(predicate::str::contains("1/2"))
        .stdout(predicate::str::contains("-200"))
        .stdout(predicate::str::contains("66.67%"));
}

#[test]
fn test_negative_moneyline_is_not_a_flag() {
    let home = home();
    odds(&home)
        .arg("-200")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.50"))
        .stdout(predicate::str::contains("2/1"));
}

#[test]
fn test_hyphen_fraction() {
    let home = home();
    odds(&home)
        .arg("5-2")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.50"))
        .stdout(predicate::str::contains("5/2"))
        .stdout(predicate::str::contains("+250"));
}

#[test]
fn test_even_money_is_positive() {
    let home = home();
    odds(&home)
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("+100"))
        .stdout(predicate::str::contains("-100").not());
}

#[test]
fn test_forced_format() {
    let home = home();
    odds(&home)
        .args(["--format", "us", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.50"))
        .stdout(predicate::str::contains("3/2"));
}

#[test]
fn test_json_output() {
    let home = home();
    let output = odds(&home)
        .args(["--json", "+225"])
        .output()
        .expect("run odds");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a JSON document");
    assert_eq!(value["format"], "us");
    assert_eq!(value["odds"]["decimal"], "3.25");
    assert_eq!(value["odds"]["fraction"], "9/4");
    assert_eq!(value["reciprocal"]["us"], "-225");
}

#[test]
fn test_verbose_shows_format() {
    let home = home();
    odds(&home)
        .args(["-v", "--color", "never", "9/4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Format"))
        .stdout(predicate::str::contains("fraction"));
}

#[test]
fn test_quiet_still_prints_table() {
    let home = home();
    odds(&home)
        .args(["--quiet", "9/4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3.25"));
}

#[test]
fn test_unknown_format_fails_without_table() {
    let home = home();
    odds(&home)
        .args(["--color", "never", "abc"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot determine odds format"));
}

#[test]
fn test_decimal_of_one_fails() {
    let home = home();
    odds(&home)
        .args(["--color", "never", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("decimal odds must be greater than 1"));
}

#[test]
fn test_zero_denominator_fails() {
    let home = home();
    odds(&home)
        .args(["--color", "never", "5/0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("denominator cannot be zero"));
}

#[test]
fn test_zero_moneyline_fails() {
    let home = home();
    odds(&home)
        .args(["--color", "never", "+0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("moneyline cannot be zero"));
}

#[test]
fn test_json_error_goes_to_stderr() {
    let home = home();
    let output = odds(&home)
        .args(["--json", "abc"])
        .output()
        .expect("run odds");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let line: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("stderr is a JSON line");
    assert_eq!(line["type"], "error");
    assert!(line["payload"]["message"]
        .as_str()
        .unwrap()
        .contains("cannot determine odds format"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let home = home();
    odds(&home).assert().code(2);
}

#[test]
fn test_extra_argument_is_usage_error() {
    let home = home();
    odds(&home).args(["1.5", "2.5"]).assert().code(2);
}
