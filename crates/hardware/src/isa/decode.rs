//! MIPS-32 Instruction Decoder.
//!
//! This module turns a 32-bit instruction word into a [`Decoded`] record. The
//! opcode (bits 31-26) selects the operation directly, except for the
//! `SPECIAL` and `SPECIAL2` opcodes whose funct field (bits 5-0) is looked up
//! in a second table. Words outside both tables are rejected.

use crate::common::error::DecodeError;
use crate::isa::instruction::{Decoded, InstructionBits, Operation};
use crate::isa::mips32::{funct, opcodes};

/// Resolves the operation for an instruction word.
///
/// # Errors
///
/// [`DecodeError::UnknownOpcode`] or [`DecodeError::UnknownFunct`] naming the raw bit pattern.
pub fn operation(word: u32) -> Result<Operation, DecodeError> {
    let opcode = word.opcode();
    let op = match opcode {
        opcodes::OP_SPECIAL => special(word)?,
        opcodes::OP_SPECIAL2 => match word.funct() {
            funct::MUL => Operation::Mul,
            f => {
                return Err(DecodeError::UnknownFunct {
                    word,
                    opcode,
                    funct: f,
                });
            }
        },
        opcodes::OP_J => Operation::J,
        opcodes::OP_JAL => Operation::Jal,
        opcodes::OP_BEQ => Operation::Beq,
        opcodes::OP_BNE => Operation::Bne,
        opcodes::OP_ADDI => Operation::Addi,
        opcodes::OP_ANDI => Operation::Andi,
        opcodes::OP_ORI => Operation::Ori,
        opcodes::OP_LUI => Operation::Lui,
        opcodes::OP_LW => Operation::Lw,
        opcodes::OP_SW => Operation::Sw,
        _ => return Err(DecodeError::UnknownOpcode { word, opcode }),
    };
    Ok(op)
}

/// Resolves the funct table of the `SPECIAL` opcode.
fn special(word: u32) -> Result<Operation, DecodeError> {
    Ok(match word.funct() {
        funct::ADD => Operation::Add,
        funct::SUB => Operation::Sub,
        funct::AND => Operation::And,
        funct::OR => Operation::Or,
        funct::XOR => Operation::Xor,
        funct::NOR => Operation::Nor,
        funct::SLT => Operation::Slt,
        funct::SLL => Operation::Sll,
        funct::SRL => Operation::Srl,
        funct::JR => Operation::Jr,
        funct::SYSCALL => Operation::Syscall,
        f => {
            return Err(DecodeError::UnknownFunct {
                word,
                opcode: opcodes::OP_SPECIAL,
                funct: f,
            });
        }
    })
}

/// Decodes an instruction word into its operation and fields.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode.
///
/// # Errors
///
/// Propagates [`operation`] failures for words outside the supported subset.
pub fn decode(word: u32) -> Result<Decoded, DecodeError> {
    Ok(Decoded {
        raw: word,
        op: operation(word)?,
        rs: word.rs(),
        rt: word.rt(),
        rd: word.rd(),
        shamt: word.shamt(),
        imm: word.imm16(),
        target: word.target(),
    })
}
