//! ALU shift operations.
//!
//! Shift-left logical, shift-right logical (zero fill), and the load-upper
//! shift that places a 16-bit immediate in the high half-word.

use crate::core::signals::AluFunction;

/// Bit mask for the 5-bit shift amount.
const SHAMT_MASK: u32 = 0x1f;

/// Width of the half-word moved by `lui`.
const HALF_WORD_BITS: u32 = 16;

/// Executes a shift operation.
///
/// For `Sll`/`Srl`, `a` is the value and `b` the shift amount. For `Lui`,
/// `b` is the immediate and `a` is ignored.
pub const fn execute(func: AluFunction, a: u32, b: u32) -> u32 {
    match func {
        AluFunction::Sll => a.wrapping_shl(b & SHAMT_MASK),
        AluFunction::Srl => a.wrapping_shr(b & SHAMT_MASK),
        AluFunction::Lui => b << HALF_WORD_BITS,
        _ => 0,
    }
}
