//! Tests for the mips32dec binary.
//!
//! Run with: cargo test cli

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn mips32dec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mips32dec"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_decode_words() {
    let output = mips32dec(&["decode", "0x71014802", "0xafbf0004", "0x0c100000"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1 71014802 R [28 8 1 9 0 2] [0x1c 8 1 9 0 2] mul $t1, $t0, $at\n\
         2 afbf0004 I [43 29 31 4] [0x2b 0x1d 0x1f 4] sw $ra, 4($sp)\n\
         3 0c100000 J [3 1048576] [3 0x100000] jal 0x100000\n"
    );
}

#[test]
fn test_file_reports_every_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# sample program").unwrap();
    writeln!(file, "0x23bdfff8").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "0x010950e0").unwrap();
    writeln!(file, "not-a-word").unwrap();
    writeln!(file, "0xfc000000").unwrap();
    writeln!(file, "0").unwrap();
    file.flush().unwrap();

    let output = mips32dec(&["file", file.path().to_str().unwrap(), "-j", "2"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(
        rows[0],
        "2 23bdfff8 I [8 29 29 65528] [8 0x1d 0x1d 0xfff8] addi $sp, $sp, -8"
    );
    assert!(rows[1].starts_with("4 010950e0 R "));
    assert!(rows[1].ends_with("add $t2, $t0, $t1 violations: shamt == 0 (found 3)"));
    assert!(rows[2].starts_with("5 invalid input: "));
    assert_eq!(
        rows[3],
        "6 fc000000 unknown instruction: no format matches opcode=0x3f"
    );
    assert_eq!(rows[4], "7 00000000 R [0 0 0 0 0 0] [0 0 0 0 0 0] nop");
}

#[test]
fn test_stdin_json() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mips32dec"))
        .args(["--format", "json", "file", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"0x71014802\n0x0000003f\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value[0]["status"], "success");
    assert_eq!(value[0]["format"], "R");
    assert_eq!(value[0]["mnemonic"], "mul $t1, $t0, $at");
    assert_eq!(value[1]["status"], "unknown");
    assert_eq!(value[1]["error"], "no instruction matches opcode=0x0, funct=0x3f");
}

#[test]
fn test_csv() {
    let output = mips32dec(&["decode", "--format", "csv", "0x03e00008"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[1],
        "1,0x03e00008,03e00008,success,R,[0 31 0 0 0 8],[0 0x1f 0 0 0 8],jr $ra,"
    );
}

#[test]
fn test_missing_file_fails() {
    let output = mips32dec(&["file", "/nonexistent/words.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}
