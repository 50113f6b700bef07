use assert_cmd::Command;
use predicates::prelude::*;

fn calculate() -> Command {
    let mut cmd = Command::cargo_bin("calculate").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_integers() {
    calculate()
        .arg(r#"{"a": 3, "b": 4}"#)
        .assert()
        .success()
        .stdout("{\"sum\": 7, \"difference\": -1, \"product\": 12}\n");
}

#[test]
fn test_cli_floats() {
    calculate()
        .arg(r#"{"a": 2.5, "b": 1.5}"#)
        .assert()
        .success()
        .stdout("{\"sum\": 4.0, \"difference\": 1.0, \"product\": 3.75}\n");
}

#[test]
fn test_cli_no_arguments() {
    calculate()
        .assert()
        .success()
        .stdout("No arguments provided\n");
}

#[test]
fn test_cli_invalid_json() {
    calculate()
        .arg("not-json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: "));
}

#[test]
fn test_cli_missing_field() {
    calculate()
        .arg(r#"{"a": 5}"#)
        .assert()
        .success()
        .stdout("Error: missing field 'b'\n");
}

#[test]
fn test_cli_non_numeric_operand() {
    calculate()
        .arg(r#"{"a": "x", "b": 2}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("'string' and 'number'"));
}

#[test]
fn test_cli_extra_arguments_ignored() {
    calculate()
        .arg(r#"{"a": 1, "b": 2}"#)
        .arg("extra")
        .arg("--not-a-flag")
        .assert()
        .success()
        .stdout("{\"sum\": 3, \"difference\": -1, \"product\": 2}\n");
}

#[test]
fn test_cli_hyphen_value_is_input() {
    calculate()
        .arg("-5")
        .assert()
        .success()
        .stdout("Error: expected a JSON object, got number\n");
}

#[test]
fn test_cli_max_input_bytes() {
    calculate()
        .arg("--max-input-bytes")
        .arg("4")
        .arg(r#"{"a": 1, "b": 2}"#)
        .assert()
        .success()
        .stdout("Error: input is 16 bytes, exceeding the limit of 4 bytes\n");
}

#[test]
fn test_cli_writes_exactly_one_line() {
    let output = calculate()
        .env("RUST_LOG", "calculate=debug")
        .arg(r#"{"a": 3, "b": 4}"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("received arguments"));
}

#[test]
fn test_cli_is_idempotent() {
    let first = calculate().arg(r#"{"a": 0.1, "b": 0.2}"#).output().unwrap();
    let second = calculate().arg(r#"{"a": 0.1, "b": 0.2}"#).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_cli_flags_after_input_are_ignored() {
    let trailing: [&[&str]; 3] = [&["--version"], &["--help"], &["--max-input-bytes", "2"]];
    for flag in trailing {
        calculate()
            .arg(r#"{"a": 1, "b": 2}"#)
            .args(flag)
            .assert()
            .success()
            .stdout("{\"sum\": 3, \"difference\": -1, \"product\": 2}\n");
    }
}

#[test]
fn test_cli_negative_zero_and_booleans() {
    calculate()
        .arg(r#"{"a": -0, "b": 1}"#)
        .assert()
        .success()
        .stdout("{\"sum\": 1, \"difference\": -1, \"product\": 0}\n");

    calculate()
        .arg(r#"{"a": true, "b": 2}"#)
        .assert()
        .success()
        .stdout("{\"sum\": 3, \"difference\": -1, \"product\": 2}\n");
}

#[cfg(unix)]
#[test]
fn test_cli_invalid_utf8_argument() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    calculate()
        .arg(OsStr::from_bytes(b"\xff"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: "));
}
