//! Decoder coverage for every supported opcode/funct pair and the rejection paths.

use mipsim_core::asm::encode::{i_type, j_type, r_type};
use mipsim_core::common::DecodeError;
use mipsim_core::isa::decode::{decode, operation};
use mipsim_core::isa::instruction::{Format, InstructionBits, Operation};

#[test]
fn test_every_operation_decodes_to_itself() {
    for op in Operation::ALL {
        let word = match op.format() {
            Format::R => r_type(op, 3, 4, 5, 0),
            Format::I => i_type(op, 6, 7, 0x1234),
            Format::J => j_type(op, 0x100),
        };
        assert_eq!(operation(word), Ok(op), "{op} -> {word:#010x}");
    }
}

#[test]
fn test_field_extraction() {
    let w = 0x8FA9_FFF8_u32; // lw $t1, -8($sp)
    assert_eq!(w.opcode(), 0x23);
    assert_eq!(w.rs(), 29);
    assert_eq!(w.rt(), 9);
    assert_eq!(w.imm16(), 0xFFF8);

    let d = decode(w).map_err(|e| e.to_string());
    assert_eq!(d.map(|d| d.imm_signed()), Ok(-8));
}

#[test]
fn test_unknown_opcode() {
    let word = 0xFC00_0000; // opcode 0x3F
    assert_eq!(
        decode(word).map(|d| d.op),
        Err(DecodeError::UnknownOpcode { word, opcode: 0x3F })
    );
}

#[test]
fn test_unknown_funct() {
    let word = 0x0000_0001; // SPECIAL, funct 1
    assert_eq!(
        operation(word),
        Err(DecodeError::UnknownFunct { word, opcode: 0, funct: 1 })
    );
    let word = 0x7000_0003; // SPECIAL2, funct 3
    assert_eq!(
        operation(word),
        Err(DecodeError::UnknownFunct { word, opcode: 0x1C, funct: 3 })
    );
}

#[test]
fn test_branch_and_jump_addresses() {
    let beq = decode(0x1109_FFFF).map_err(|e| e.to_string());
    assert_eq!(beq.map(|d| d.branch_address(0x20)), Ok(0x20));
    let jal = decode(0x0C00_0010).map_err(|e| e.to_string());
    assert_eq!(jal.map(|d| d.jump_address()), Ok(0x40));
}
