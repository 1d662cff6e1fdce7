//! Disassembler output format.

use mipsim_core::isa::disasm::{disassemble, disassemble_at};
use rstest::rstest;

#[rstest]
#[case(0x2008_0005, "addi t0, zero, 5")]
#[case(0x2108_FFFF, "addi t0, t0, -1")]
#[case(0x0109_5020, "add t2, t0, t1")]
#[case(0x712A_4002, "mul t0, t1, t2")]
#[case(0x0009_4100, "sll t0, t1, 4")]
#[case(0x3528_8000, "ori t0, t1, 0x8000")]
#[case(0x3C08_1001, "lui t0, 0x1001")]
#[case(0x8FA9_FFFC, "lw t1, -4(sp)")]
#[case(0x03E0_0008, "jr ra")]
#[case(0x0000_000C, "syscall")]
#[case(0x0800_0004, "j 0x00000010")]
#[case(0x1500_FFFD, "bne t0, zero, -3")]
#[case(0xFC00_0000, "unknown")]
fn test_disassemble(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}

#[test]
fn test_disassemble_at_resolves_branch_target() {
    assert_eq!(disassemble_at(0x1500_FFFD, 8), "bne t0, zero, 0x00000000");
}
