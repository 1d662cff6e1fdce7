//! Instruction encoder.
//!
//! Packs parsed operands into 32-bit words following the standard MIPS-32
//! layouts (MSB first):
//! - R-type: `opcode(6) rs(5) rt(5) rd(5) shamt(5) funct(6)`
//! - I-type: `opcode(6) rs(5) rt(5) imm(16)`
//! - J-type: `opcode(6) target(26)`
//!
//! A source line encodes to an [`EncodedUnit`]: one word for a native
//! instruction, two for the `li`/`la`/label-load expansions.

use crate::asm::operands::{
    is_label_expr, parse_int, parse_int_in, parse_mem_operand, resolve_address,
};
use crate::asm::pseudo;
use crate::asm::symbols::SymbolTable;
use crate::common::constants::{IMM16_MAX, IMM16_MIN, JUMP_TARGET_MASK, LOW_HALF_MASK, OFFSET16_MAX};
use crate::common::error::EncodingError;
use crate::isa::abi::parse_register;
use crate::isa::instruction::{
    OPCODE_SHIFT, Operation, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT, SHAMT_SHIFT,
};

/// Largest shift amount accepted by `sll`/`srl`.
const SHAMT_MAX: i64 = 31;

/// Encoded form of one source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodedUnit {
    /// A native instruction or single-word expansion.
    OneWord(u32),
    /// A two-word pseudo-instruction expansion, in execution order.
    TwoWords(u32, u32),
    /// The line failed to encode; its reserved slots hold no word.
    Invalid,
}

impl EncodedUnit {
    /// Words produced, in program order.
    pub fn words(self) -> Vec<u32> {
        match self {
            Self::OneWord(w) => vec![w],
            Self::TwoWords(a, b) => vec![a, b],
            Self::Invalid => Vec::new(),
        }
    }
}

/// Packs an R-type instruction.
pub const fn r_type(op: Operation, rd: usize, rs: usize, rt: usize, shamt: u32) -> u32 {
    let funct = match op.funct() {
        Some(f) => f,
        None => 0,
    };
    (op.opcode() << OPCODE_SHIFT)
        | ((rs as u32 & REG_MASK) << RS_SHIFT)
        | ((rt as u32 & REG_MASK) << RT_SHIFT)
        | ((rd as u32 & REG_MASK) << RD_SHIFT)
        | ((shamt & REG_MASK) << SHAMT_SHIFT)
        | funct
}

/// Packs an I-type instruction; `imm` is truncated to 16 bits.
pub const fn i_type(op: Operation, rt: usize, rs: usize, imm: u32) -> u32 {
    (op.opcode() << OPCODE_SHIFT)
        | ((rs as u32 & REG_MASK) << RS_SHIFT)
        | ((rt as u32 & REG_MASK) << RT_SHIFT)
        | (imm & LOW_HALF_MASK)
}

/// Packs a J-type instruction from an absolute byte address.
pub const fn j_type(op: Operation, target_addr: u32) -> u32 {
    (op.opcode() << OPCODE_SHIFT) | ((target_addr >> 2) & JUMP_TARGET_MASK)
}

/// Checks the operand count for a mnemonic.
pub(crate) fn expect_operands(
    mnemonic: &str,
    operands: &[&str],
    expected: usize,
) -> Result<(), EncodingError> {
    if operands.len() == expected {
        Ok(())
    } else {
        Err(EncodingError::OperandCount {
            mnemonic: mnemonic.to_string(),
            expected,
            found: operands.len(),
        })
    }
}

/// Encodes one instruction line located at `pc`.
///
/// # Arguments
///
/// * `mnemonic` - Lower-cased mnemonic (native or pseudo).
/// * `operands` - Operand tokens in source order.
/// * `pc`       - Address of the first slot of this line.
/// * `symbols`  - Fully populated symbol table.
///
/// # Errors
///
/// The [`EncodingError`] naming the first offending token.
pub fn encode(
    mnemonic: &str,
    operands: &[&str],
    pc: u32,
    symbols: &SymbolTable,
) -> Result<EncodedUnit, EncodingError> {
    match mnemonic {
        "li" => return pseudo::expand_li(operands),
        "la" => return pseudo::expand_la(operands, symbols),
        "lw" | "sw" if operands.len() == 2 && is_label_expr(operands[1]) => {
            let op = if mnemonic == "lw" { Operation::Lw } else { Operation::Sw };
            return pseudo::expand_label_access(op, operands, symbols);
        }
        _ => {}
    }

    let op = Operation::from_mnemonic(mnemonic)
        .ok_or_else(|| EncodingError::UnknownMnemonic(mnemonic.to_string()))?;
    encode_native(op, operands, pc, symbols).map(EncodedUnit::OneWord)
}

/// Encodes a native (non-pseudo) instruction into a single word.
///
/// # Errors
///
/// See [`encode`].
pub fn encode_native(
    op: Operation,
    operands: &[&str],
    pc: u32,
    symbols: &SymbolTable,
) -> Result<u32, EncodingError> {
    let mn = op.mnemonic();
    let imm16 = |token: &str| parse_int_in(token, IMM16_MIN, IMM16_MAX).map(|v| v as u32);

    let word = match op {
        Operation::Add
        | Operation::Sub
        | Operation::And
        | Operation::Or
        | Operation::Xor
        | Operation::Nor
        | Operation::Slt
        | Operation::Mul => {
            expect_operands(mn, operands, 3)?;
            let rd = parse_register(operands[0])?;
            let rs = parse_register(operands[1])?;
            let rt = parse_register(operands[2])?;
            r_type(op, rd, rs, rt, 0)
        }
        Operation::Sll | Operation::Srl => {
            expect_operands(mn, operands, 3)?;
            let rd = parse_register(operands[0])?;
            let rt = parse_register(operands[1])?;
            let shamt = parse_int_in(operands[2], 0, SHAMT_MAX)?;
            r_type(op, rd, 0, rt, shamt as u32)
        }
        Operation::Jr => {
            expect_operands(mn, operands, 1)?;
            let rs = parse_register(operands[0])?;
            r_type(op, 0, rs, 0, 0)
        }
        Operation::Syscall => {
            expect_operands(mn, operands, 0)?;
            r_type(op, 0, 0, 0, 0)
        }
        Operation::Addi | Operation::Andi | Operation::Ori => {
            expect_operands(mn, operands, 3)?;
            let rt = parse_register(operands[0])?;
            let rs = parse_register(operands[1])?;
            i_type(op, rt, rs, imm16(operands[2])?)
        }
        Operation::Lui => {
            expect_operands(mn, operands, 2)?;
            let rt = parse_register(operands[0])?;
            i_type(op, rt, 0, imm16(operands[1])?)
        }
        Operation::Lw | Operation::Sw => {
            expect_operands(mn, operands, 2)?;
            let rt = parse_register(operands[0])?;
            let (offset, base) = parse_mem_operand(operands[1])?;
            i_type(op, rt, base, offset as u32)
        }
        Operation::Beq | Operation::Bne => {
            expect_operands(mn, operands, 3)?;
            let rs = parse_register(operands[0])?;
            let rt = parse_register(operands[1])?;
            let disp = branch_displacement(operands[2], pc, symbols)?;
            i_type(op, rt, rs, disp as u32)
        }
        Operation::J | Operation::Jal => {
            expect_operands(mn, operands, 1)?;
            j_type(op, resolve_address(operands[0], symbols)?)
        }
    };
    Ok(word)
}

/// Computes the word displacement `(target - (pc + 4)) >> 2` of a branch.
///
/// A literal operand is taken as the displacement itself.
fn branch_displacement(token: &str, pc: u32, symbols: &SymbolTable) -> Result<i64, EncodingError> {
    let disp = if parse_int(token).is_some() {
        parse_int_in(token, -(OFFSET16_MAX + 1), OFFSET16_MAX)?
    } else {
        let target = resolve_address(token, symbols)?;
        (i64::from(target) - (i64::from(pc) + 4)) >> 2
    };
    if (-(OFFSET16_MAX + 1)..=OFFSET16_MAX).contains(&disp) {
        Ok(disp)
    } else {
        Err(EncodingError::BranchOutOfRange(token.to_string()))
    }
}
