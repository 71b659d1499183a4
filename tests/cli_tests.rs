//! End-to-end tests of the `tinyc` binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(rel)
}

fn tinyc(args: &[&str], files: &[PathBuf]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tinyc"))
        .args(args)
        .args(files)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_valid_file_succeeds() {
    let file = fixture("valid/factorial.tny");
    let output = tinyc(&[], &[file.clone()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("Process File {} success..\n", file.display()));
}

#[test]
fn test_failing_file_prints_table_and_later_files_still_run() {
    let bad = fixture("invalid/undeclared.tny");
    let good = fixture("valid/loops.tny");
    let output = tinyc(&[], &[bad.clone(), good.clone()]);
    assert_eq!(output.status.code(), Some(1));
    let expected = format!(
        "Process File {} has exceptions:\n\
         ErrorKind       Message\n\
         ANALYSIS_ERROR  'x' used before declaration on line 2\n\
         Process File {} success..\n",
        bad.display(),
        good.display()
    );
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_missing_file_fails_without_stopping() {
    let missing = fixture("valid/missing.tny");
    let good = fixture("valid/dangling_else.tny");
    let output = tinyc(&[], &[missing, good.clone()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.tny"));
    assert!(stdout(&output).contains(&format!("Process File {} success..", good.display())));
}

#[test]
fn test_usage_error_exit_code() {
    let output = tinyc(&["--no-such-flag"], &[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_symbols_flag_prints_report() {
    let output = tinyc(&["--symbols"], &[fixture("valid/factorial.tny")]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Variable_Name  Memory_Address  Type  Appear_Line_Number"));
    assert!(text.contains("fact           0x00000001      int   2 6 6 10"));
}

#[test]
fn test_lex_and_parse_dumps() {
    let file = fixture("valid/dangling_else.tny");
    let output = tinyc(&["--lex"], &[file.clone()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("end of file"));

    let output = tinyc(&["--parse"], &[file]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("If [line 3]"));
}

#[test]
fn test_emit_dir_writes_one_artifact_per_file() {
    let dir = std::env::temp_dir().join(format!("tinyc-emit-{}", std::process::id()));
    let output = tinyc(
        &["--emit-dir", dir.to_str().unwrap()],
        &[fixture("valid/factorial.tny"), fixture("valid/loops.tny")],
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(dir.join("factorial.out").is_file());
    assert!(dir.join("loops.out").is_file());
    let _ = std::fs::remove_dir_all(&dir);
}
