//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction, decoding,
//! and disassembly for the supported MIPS-32 subset:
//! `add sub and or xor nor slt mul sll srl jr syscall addi andi ori lui lw sw beq bne j jal`.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for step events and diagnostics.
pub mod disasm;

/// Instruction formats, operations, and bit extraction utilities.
pub mod instruction;

/// Primary opcodes and function codes of the MIPS-32 subset.
pub mod mips32;
