//! Pseudo-instruction expansion.

use mipsim_core::asm::assemble;
use mipsim_core::isa::decode::decode;
use mipsim_core::isa::instruction::Operation;
use proptest::prelude::*;

fn words(line: &str) -> Vec<u32> {
    let program = assemble(&[line]);
    assert!(program.is_ok(), "{:?}", program.diagnostics);
    program.machine_words().collect()
}

#[test]
fn test_li_boundaries_single_word() {
    assert_eq!(words("li $t0, -32768"), vec![0x2008_8000]);
    assert_eq!(words("li $t0, 65535"), vec![0x2008_FFFF]);
    assert_eq!(words("li $t0, 0"), vec![0x2008_0000]);
}

#[test]
fn test_li_just_outside_range() {
    assert_eq!(words("li $t0, 65536"), vec![0x3C08_0001, 0x3508_0000]);
    assert_eq!(words("li $t0, -32769"), vec![0x3C08_FFFF, 0x3508_7FFF]);
}

#[test]
fn test_li_out_of_32_bits_is_rejected() {
    let program = assemble(&["li $t0, 0x100000000"]);
    assert_eq!(program.diagnostics.len(), 1);
    assert_eq!(program.instructions.len(), 2);
    assert!(program.instructions.iter().all(|r| r.word.is_none()));
}

#[test]
fn test_la_always_two_words() {
    let program = assemble(&[".data", "v: .word 7", ".text", "la $a0, v"]);
    assert!(program.is_ok());
    let w: Vec<u32> = program.machine_words().collect();
    assert_eq!(w, vec![0x3C04_1001, 0x3484_0000]);
}

#[test]
fn test_la_with_offset() {
    let program = assemble(&[".data", "a: .word 1, 2", ".text", "la $t0, a+4"]);
    let w: Vec<u32> = program.machine_words().collect();
    assert_eq!(w[1] & 0xFFFF, 0x0004);
}

#[test]
fn test_label_load_expands_through_at() {
    let program = assemble(&[".data", "x: .word 9", ".text", "lw $t0, x", "sw $t0, x+4"]);
    assert!(program.is_ok());
    let w: Vec<u32> = program.machine_words().collect();
    assert_eq!(w.len(), 4);
    let lui = decode(w[0]).map(|d| (d.op, d.rt, d.imm));
    let lw = decode(w[1]).map(|d| (d.op, d.rs, d.rt, d.imm));
    assert_eq!(lui, Ok((Operation::Lui, 1, 0x1001)));
    assert_eq!(lw, Ok((Operation::Lw, 1, 8, 0)));
    assert_eq!(w[3] & 0xFFFF, 4);
}

#[test]
fn test_expansion_shifts_later_labels() {
    let program = assemble(&["la $t0, end", "li $t1, 0x12345678", "end: syscall"]);
    assert!(program.is_ok());
    assert_eq!(program.symbols.resolve("end"), Some(16));
    assert_eq!(program.instructions[4].address, 16);
}

proptest! {
    /// In-range literals become exactly `addi rt, $zero, imm`.
    #[test]
    fn prop_li_in_range_is_addi(imm in -32768i64..=65535) {
        let li = words(&format!("li $t3, {imm}"));
        let addi = words(&format!("addi $t3, $zero, {imm}"));
        prop_assert_eq!(li.len(), 1);
        prop_assert_eq!(li, addi);
    }

    /// Out-of-range literals become `lui`/`ori` recombining to the 32-bit pattern.
    #[test]
    fn prop_li_out_of_range_recombines(
        imm in prop_oneof![i64::from(i32::MIN)..-32768i64, 65536i64..=i64::from(u32::MAX)]
    ) {
        let w = words(&format!("li $s1, {imm}"));
        prop_assert_eq!(w.len(), 2);
        let upper = decode(w[0]).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let lower = decode(w[1]).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(upper.op, Operation::Lui);
        prop_assert_eq!(lower.op, Operation::Ori);
        prop_assert_eq!((lower.rs, lower.rt), (17, 17));
        let combined = (u32::from(upper.imm) << 16) | u32::from(lower.imm);
        prop_assert_eq!(combined, (imm & 0xFFFF_FFFF) as u32);
    }
}
