//! ALU arithmetic operations.
//!
//! Addition, subtraction, and multiplication on 32-bit words. Overflow wraps
//! modulo 2^32 and `mul` keeps only the low 32 bits of the product.

use crate::core::signals::AluFunction;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic functions.
pub const fn execute(func: AluFunction, a: u32, b: u32) -> u32 {
    match func {
        AluFunction::Add => a.wrapping_add(b),
        AluFunction::Sub => a.wrapping_sub(b),
        AluFunction::Mul => (a as i32).wrapping_mul(b as i32) as u32,
        _ => 0,
    }
}
