//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU of the single-cycle datapath.
//! All results wrap modulo 2^32; no operation traps on overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul
//! - [`logic`]:      And, Or, Xor, Nor, Slt
//! - [`shifts`]:     Sll, Srl, Lui

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, nor, slt).
pub mod logic;

/// Shift operations (sll, srl, lui).
pub mod shifts;

use crate::core::signals::AluFunction;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU function.
    ///
    /// # Arguments
    ///
    /// * `func` - The ALU function resolved by ALU control
    /// * `a`    - First operand (`rs`, or `rt` for shifts)
    /// * `b`    - Second operand (`rt`, the immediate, or the shift amount)
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::signals::AluFunction;
    ///
    /// assert_eq!(Alu::execute(AluFunction::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluFunction::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluFunction::Sll, 0x1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluFunction::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluFunction::Lui, 0, 0x1001), 0x1001_0000);
    /// ```
    pub const fn execute(func: AluFunction, a: u32, b: u32) -> u32 {
        match func {
            AluFunction::Add | AluFunction::Sub | AluFunction::Mul => {
                arithmetic::execute(func, a, b)
            }
            AluFunction::And
            | AluFunction::Or
            | AluFunction::Xor
            | AluFunction::Nor
            | AluFunction::Slt => logic::execute(func, a, b),
            AluFunction::Sll | AluFunction::Srl | AluFunction::Lui => shifts::execute(func, a, b),
        }
    }
}
