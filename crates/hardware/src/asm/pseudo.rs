//! Pseudo-instruction expansion.
//!
//! - `li rt, imm`: one `addi rt, $zero, imm` when `-32768 <= imm <= 65535`,
//!   otherwise `lui rt, imm[31:16]` + `ori rt, rt, imm[15:0]`.
//! - `la rt, addr`: always `lui rt, addr[31:16]` + `ori rt, rt, addr[15:0]`.
//! - `lw`/`sw rt, label`: `lui $at, hi` + `lw`/`sw rt, lo($at)`, with `hi`
//!   adjusted for the sign extension of `lo`.
//!
//! [`planned_slots`] must agree with the expansions here: the first pass
//! uses it to place labels at their final addresses.

use crate::asm::encode::{EncodedUnit, expect_operands, i_type};
use crate::asm::operands::{is_label_expr, parse_int, parse_int_in, resolve_address};
use crate::asm::symbols::SymbolTable;
use crate::common::constants::{IMM16_MAX, IMM16_MIN};
use crate::common::error::EncodingError;
use crate::isa::abi::{REG_AT, REG_ZERO, parse_register};
use crate::isa::instruction::Operation;

/// Range of literals accepted by `li` (any 32-bit pattern, signed or unsigned).
const LI_MIN: i64 = i32::MIN as i64;
const LI_MAX: i64 = u32::MAX as i64;

/// Rounding bias applied to the high half when the low half is sign-extended.
const HI_ROUND: u32 = 0x8000;

/// Returns `true` if `li` with this literal fits a single `addi`.
pub const fn li_is_single(value: i64) -> bool {
    value >= IMM16_MIN && value <= IMM16_MAX
}

/// Number of 4-byte slots a source instruction occupies once expanded.
///
/// A `li` whose literal does not parse is planned as one slot; it fails to
/// encode anyway and reserves exactly what was planned.
pub fn planned_slots(mnemonic: &str, operands: &[&str]) -> u32 {
    match mnemonic {
        "li" => match operands.get(1).and_then(|t| parse_int(t)) {
            Some(v) if !li_is_single(v) => 2,
            _ => 1,
        },
        "la" => 2,
        "lw" | "sw" if operands.len() == 2 && is_label_expr(operands[1]) => 2,
        _ => 1,
    }
}

/// Expands `li`.
///
/// # Errors
///
/// Register and immediate errors of the operands.
pub fn expand_li(operands: &[&str]) -> Result<EncodedUnit, EncodingError> {
    expect_operands("li", operands, 2)?;
    let rt = parse_register(operands[0])?;
    let value = parse_int_in(operands[1], LI_MIN, LI_MAX)?;
    if li_is_single(value) {
        Ok(EncodedUnit::OneWord(i_type(Operation::Addi, rt, REG_ZERO, value as u32)))
    } else {
        Ok(load_upper_lower(rt, value as u32))
    }
}

/// Expands `la`.
///
/// # Errors
///
/// Register and label errors of the operands.
pub fn expand_la(operands: &[&str], symbols: &SymbolTable) -> Result<EncodedUnit, EncodingError> {
    expect_operands("la", operands, 2)?;
    let rt = parse_register(operands[0])?;
    let addr = resolve_address(operands[1], symbols)?;
    Ok(load_upper_lower(rt, addr))
}

/// Expands a `lw`/`sw` whose address operand is a label expression.
///
/// # Errors
///
/// Register and label errors of the operands.
pub fn expand_label_access(
    op: Operation,
    operands: &[&str],
    symbols: &SymbolTable,
) -> Result<EncodedUnit, EncodingError> {
    expect_operands(op.mnemonic(), operands, 2)?;
    let rt = parse_register(operands[0])?;
    let addr = resolve_address(operands[1], symbols)?;
    let hi = addr.wrapping_add(HI_ROUND) >> 16;
    Ok(EncodedUnit::TwoWords(
        i_type(Operation::Lui, REG_AT, REG_ZERO, hi),
        i_type(op, rt, REG_AT, addr),
    ))
}

fn load_upper_lower(rt: usize, value: u32) -> EncodedUnit {
    EncodedUnit::TwoWords(
        i_type(Operation::Lui, rt, REG_ZERO, value >> 16),
        i_type(Operation::Ori, rt, rt, value),
    )
}
