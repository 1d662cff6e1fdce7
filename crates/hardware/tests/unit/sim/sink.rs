//! Machine-code output.

use std::fs;

use mipsim_core::asm::assemble;
use mipsim_core::sim::sink::{WordFormat, write_machine_code};
use pretty_assertions::assert_eq;

#[test]
fn test_binary_lines_include_expansions() {
    let program = assemble(&["addi $t0, $zero, 5", "li $t1, 0x12345678"]);
    let mut out = Vec::new();
    let count = write_machine_code(&program, &mut out, WordFormat::Binary).unwrap_or_default();

    assert_eq!(count, 3);
    let text = String::from_utf8(out).unwrap_or_default();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "00100000000010000000000000000101");
    assert!(lines.iter().all(|l| l.len() == 32));
}

#[test]
fn test_invalid_lines_are_omitted() {
    let program = assemble(&["addi $t0, $zero, 5", "beq $t0, $t1, nowhere", "syscall"]);
    let mut out = Vec::new();
    let count = write_machine_code(&program, &mut out, WordFormat::Hex).unwrap_or_default();

    assert_eq!(count, 2);
    assert_eq!(
        String::from_utf8(out).unwrap_or_default(),
        "0x20080005\n0x0000000c\n"
    );
}

#[test]
fn test_writes_to_file() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
    let path = dir.path().join("out.txt");
    let file = fs::File::create(&path).unwrap_or_else(|e| panic!("create: {e}"));

    let program = assemble(&["syscall"]);
    let count = write_machine_code(&program, file, WordFormat::Hex).unwrap_or_default();

    assert_eq!(count, 1);
    assert_eq!(fs::read_to_string(&path).unwrap_or_default(), "0x0000000c\n");
}
