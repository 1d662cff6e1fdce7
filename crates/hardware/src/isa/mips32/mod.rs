//! MIPS-32 Integer Subset.
//!
//! Defines the closed set of instructions understood by the assembler and the engine.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: Function codes (bits 5-0) for the `SPECIAL` and `SPECIAL2` opcodes.

/// Function code definitions for register-register operations.
pub mod funct;

/// Primary opcode definitions.
pub mod opcodes;
