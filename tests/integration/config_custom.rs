//! Integration tests for custom keys and the config file.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[allow(deprecated)]
fn loghue() -> Command {
    let mut cmd = Command::cargo_bin("loghue").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/loghue-test-no-config");
    cmd
}

#[test]
fn custom_message_key() {
    let input = r#"{"level":"info","what":"something happened","port":8080}"#;
    loghue()
        .arg("--color=never")
        .arg("--message-key=what")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("INFO  something happened"))
        .stdout(predicate::str::contains(" port=8080"));
}

#[test]
fn custom_level_key() {
    let input = r#"{"prio":"warn","msg":"disk low"}"#;
    loghue()
        .arg("--color=never")
        .arg("--level-key=prio")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WARN  disk low"));
}

#[test]
fn config_file_sets_layout_and_aliases() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
color = "never"

[layout]
label_width = 6
message_width = 10

[levels]
notice = "warn"
"#
    )
    .unwrap();

    let input = r#"{"level":"notice","msg":"hi","k":1}"#;
    loghue()
        .arg("--config")
        .arg(file.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout("WARN   hi         k=1\n");
}

#[test]
#[allow(deprecated)]
fn config_from_xdg_dir() {
    let dir = tempfile::tempdir().unwrap();
    let conf_dir = dir.path().join("loghue");
    std::fs::create_dir_all(&conf_dir).unwrap();
    std::fs::write(conf_dir.join("config.toml"), "[keys]\nmessage = \"what\"\n").unwrap();

    let input = r#"{"level":"error","what":"from xdg"}"#;
    Command::cargo_bin("loghue")
        .unwrap()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ERROR from xdg"));
}

#[test]
fn cli_flag_overrides_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[layout]\nmessage_width = 50").unwrap();

    let input = r#"{"level":"info","msg":"hi","k":1}"#;
    loghue()
        .arg("--config")
        .arg(file.path())
        .args(["--color=never", "--message-width=2"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("INFO  hi k=1\n");
}
