//! Integration tests for mixed JSON + non-JSON input.

use assert_cmd::Command;

#[allow(deprecated)]
fn loghue() -> Command {
    let mut cmd = Command::cargo_bin("loghue").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/loghue-test-no-config");
    cmd
}

#[test]
fn json_and_plain_text_mixed() {
    let input = r#"Starting application...
{"level":"info","msg":"server started","port":8080}
Plain text log line
{"level":"error","msg":"connection failed"}
Shutting down."#;

    let output = loghue()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Starting application...");
    assert!(lines[1].starts_with("INFO  server started"));
    assert!(lines[1].ends_with(" port=8080"));
    assert_eq!(lines[2], "Plain text log line");
    assert!(lines[3].starts_with("ERROR connection failed"));
    assert_eq!(lines[4], "Shutting down.");
}

#[test]
fn malformed_json_passthrough() {
    let input = r#"{"level":"info", "msg":}
{"level":"info","msg":"valid line"}"#;

    let output = loghue()
        .arg("--color=always")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], r#"{"level":"info", "msg":}"#);
    assert!(lines[1].starts_with("\x1b[34mINFO \x1b[0m valid line"));
}

#[test]
fn json_arrays_pass_through() {
    loghue()
        .arg("--color=never")
        .write_stdin("[1,2,3]\n")
        .assert()
        .success()
        .stdout("[1,2,3]\n");
}

#[test]
fn invalid_utf8_lines_pass_through_unchanged() {
    let input: &[u8] = b"before\n\xff\xfe raw bytes\n{\"level\":\"warn\",\"msg\":\"after\"}\r\n";
    let output = loghue()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<&[u8]> = output.stdout.split(|&b| b == b'\n').collect();
    // Three lines plus the empty tail after the final newline.
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], b"before");
    assert_eq!(lines[1], b"\xff\xfe raw bytes");
    assert!(lines[2].starts_with(b"WARN  after"));
    assert!(lines[3].is_empty());
}
