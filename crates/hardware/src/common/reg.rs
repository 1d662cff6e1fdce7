//! General-Purpose Register File.
//!
//! This module implements the MIPS-32 register file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`$0`-`$31`), indexed by number.
//! 2. **Invariant Enforcement:** Register `$zero` always reads as 0; writes to it are discarded.
//! 3. **Observability:** Name-indexed dumps and owned snapshots for presenters.

use std::fmt;

use crate::common::constants::{NUM_REGISTERS, STACK_POINTER_INIT};
use crate::isa::abi;

/// General-purpose register file.
///
/// The numeric index is the source of truth; ABI names are only a parse and
/// display alias (see [`crate::isa::abi`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file in the program-start state.
    ///
    /// All registers are zero except `$sp`, which holds [`STACK_POINTER_INIT`].
    pub fn new() -> Self {
        Self::with_stack_pointer(STACK_POINTER_INIT)
    }

    /// Creates a register file whose `$sp` starts at `sp`.
    pub fn with_stack_pointer(sp: u32) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[abi::REG_SP] = sp;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `$zero` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == abi::REG_ZERO {
            0
        } else {
            self.regs[idx & (NUM_REGISTERS - 1)]
        }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$zero` are accepted and discarded.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != abi::REG_ZERO {
            self.regs[idx & (NUM_REGISTERS - 1)] = val;
        }
    }

    /// Reads a register by ABI name (`t0`, `$sp`, `$8`).
    ///
    /// Returns `None` when the name does not resolve.
    pub fn read_named(&self, name: &str) -> Option<u32> {
        abi::parse_register(name).ok().map(|idx| self.read(idx))
    }

    /// Returns a copy of all 32 register values, index order.
    pub fn values(&self) -> [u32; NUM_REGISTERS] {
        let mut out = self.regs;
        out[abi::REG_ZERO] = 0;
        out
    }
}

impl fmt::Display for RegisterFile {
    /// Prints four registers per row using ABI names, signed decimal values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..NUM_REGISTERS).step_by(4) {
            for idx in row..row + 4 {
                let sep = if idx + 1 == row + 4 { "\n" } else { " | " };
                write!(
                    f,
                    "${:<4}: {:<11}{}",
                    abi::register_name(idx),
                    self.read(idx) as i32,
                    sep
                )?;
            }
        }
        Ok(())
    }
}
