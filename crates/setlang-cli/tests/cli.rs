// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the `setlang` binary.
//!
//! Each test writes source files into a temporary directory and runs the
//! compiled binary against them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const VALID: &str = "Начало\nПервое а, б\nВторое 1, 2\n3 Конец слагаемого\nа = Синус б + 1\nКонец";
const MISSING_COMMA: &str = "Начало\nПервое а б\n3 Конец слагаемого\nа = 1\nКонец";

fn setlang(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_setlang"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run setlang")
}

fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write source");
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn check_valid_program() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "ok.mnz", VALID);

    let output = setlang(&["check", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("ok (2 sets, 1 operations)"));
}

#[test]
fn check_reports_error_with_source_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "bad.mnz", MISSING_COMMA);

    let output = setlang(&["check", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("variables must be separated by commas"), "stderr: {err}");
    assert!(err.contains("bad.mnz"), "stderr: {err}");
    assert!(err.contains("1 of 1 file failed to compile"), "stderr: {err}");
}

#[test]
fn check_json_reports_every_file() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "a.mnz", VALID);
    write_source(dir.path(), "b.mnz", MISSING_COMMA);

    let output = setlang(&["check", "--format", "json", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());

    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["ok"], true);
    assert!(lines[0].get("error").is_none());
    assert_eq!(lines[1]["ok"], false);
    assert_eq!(lines[1]["error"]["category"], "MalformedList");
    assert_eq!(lines[1]["error"]["line"], 2);
    // "Первое а " is 9 characters; the offending `б` is the tenth.
    assert_eq!(lines[1]["error"]["column"], 10);
}

#[test]
fn ast_prints_json_tree() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "ok.mnz", VALID);

    let output = setlang(&["ast", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let tree: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(tree["sets"]["body"][0]["kind"], "First");
    assert_eq!(tree["sets"]["body"][1]["kind"], "Second");
    assert_eq!(tree["summand"]["body"][0]["value"], 3);

    let rhs = &tree["operations"][0]["rhs"];
    assert_eq!(rhs["kind"], "Binary");
    assert_eq!(rhs["lhs"]["kind"], "Function");
    assert_eq!(rhs["lhs"]["function"], "Sine");
}

#[test]
fn tokens_lists_stream_with_eof() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "t.mnz", "а = 1");

    let output = setlang(&["tokens", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "0..2\tIdentifier\tа");
    assert_eq!(lines[3], "6..6\tEof\t<eof>");
}

#[test]
fn tokens_reports_lexical_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "t.mnz", "а = 9");

    let output = setlang(&["tokens", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unexpected character '9'"));
}

#[test]
fn fmt_check_then_fmt() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "f.mnz", "Начало\nПервое а,б\n1 Конец слагаемого\nа=б\nКонец");
    let arg = path.to_str().unwrap();

    let check = setlang(&["fmt", "--check", arg]);
    assert!(!check.status.success());
    assert!(stdout(&check).contains("+Первое а, б"));

    let fmt = setlang(&["fmt", arg]);
    assert!(fmt.status.success(), "stderr: {}", stderr(&fmt));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Начало\nПервое а, б\n1 Конец слагаемого\nа = б\nКонец"
    );

    let recheck = setlang(&["fmt", "--check", arg]);
    assert!(recheck.status.success());
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "ok.mnz", VALID);

    let output = setlang(&["--verbose", "check", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("parsed program"));
    assert!(!stdout(&output).contains("parsed program"));
}

#[test]
fn missing_path_fails() {
    let output = setlang(&["check", "/no/such/file.mnz"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("does not exist"));
}
