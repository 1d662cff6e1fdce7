//! MIPS Application Binary Interface (ABI) register names.
//!
//! Defines the conventional register names and their indices, and the
//! name→index parsing used by the assembler. Names are display and parse
//! aliases only; the engine always works with indices.

use crate::common::error::EncodingError;

/// Register `$0` (`$zero`, always zero).
pub const REG_ZERO: usize = 0;
/// Register `$1` (`$at`, assembler temporary).
pub const REG_AT: usize = 1;
/// Register `$2` (`$v0`, syscall number / return value).
pub const REG_V0: usize = 2;
/// Register `$4` (`$a0`, first argument).
pub const REG_A0: usize = 4;
/// Register `$29` (`$sp`, stack pointer).
pub const REG_SP: usize = 29;
/// Register `$31` (`$ra`, return address).
pub const REG_RA: usize = 31;

/// ABI register names for `$0`–`$31`.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the ABI name for a register index, or `"??"` when out of range.
#[inline]
pub fn register_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}

/// Parses a register operand into its index.
///
/// Accepts `$name`, `name`, `$N`, and `N` where `N` is `0..=31`.
///
/// # Errors
///
/// [`EncodingError::RegisterOutOfRange`] for numbers above 31 and
/// [`EncodingError::UnknownRegister`] for anything else that does not resolve.
pub fn parse_register(token: &str) -> Result<usize, EncodingError> {
    let name = token.trim();
    let bare = name.strip_prefix('$').unwrap_or(name);

    if !bare.is_empty() && bare.bytes().all(|b| b.is_ascii_digit()) {
        return match bare.parse::<usize>() {
            Ok(n) if n < REG_NAMES.len() => Ok(n),
            _ => Err(EncodingError::RegisterOutOfRange(name.to_string())),
        };
    }

    REG_NAMES
        .iter()
        .position(|&n| n == bare)
        .ok_or_else(|| EncodingError::UnknownRegister(name.to_string()))
}
