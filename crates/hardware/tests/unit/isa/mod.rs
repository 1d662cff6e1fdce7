//! # ISA Unit Tests

/// Opcode/funct decoding and error reporting.
pub mod decode;

/// Disassembler output format.
pub mod disasm;
