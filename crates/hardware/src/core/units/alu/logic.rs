//! ALU logical and comparison operations.
//!
//! Bitwise AND, OR, XOR, NOR, and signed set-less-than. The comparison
//! result is always 0 or 1.

use crate::core::signals::AluFunction;

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic functions.
pub const fn execute(func: AluFunction, a: u32, b: u32) -> u32 {
    match func {
        AluFunction::And => a & b,
        AluFunction::Or => a | b,
        AluFunction::Xor => a ^ b,
        AluFunction::Nor => !(a | b),
        AluFunction::Slt => ((a as i32) < (b as i32)) as u32,
        _ => 0,
    }
}
