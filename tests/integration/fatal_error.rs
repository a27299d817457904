//! Integration tests for the final fatal entry on unrecoverable errors.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn loghue() -> Command {
    let mut cmd = Command::cargo_bin("loghue").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/loghue-test-no-config");
    cmd
}

#[test]
fn missing_config_reports_uncaught_error() {
    loghue()
        .args(["--color=never", "--config", "/nonexistent/loghue.toml"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("ERROR Uncaught error"))
        .stderr(predicate::str::contains(" error=configuration error: cannot read config file"))
        .stderr(predicate::str::ends_with("\n"));
}

#[test]
fn invalid_config_file_is_styled_when_forced() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, b"color = [").unwrap();

    loghue()
        .arg("--color=always")
        .arg("--config")
        .arg(file.path())
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("\x1b[31mERROR\x1b[0m Uncaught error"))
        .stderr(predicate::str::contains("\x1b[31merror\x1b[0m=config file error"));
}

#[test]
fn invalid_flag_value_is_a_usage_error() {
    loghue()
        .arg("--color=sometimes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
