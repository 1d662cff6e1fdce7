//! MIPS-32 subset assembler and single-cycle datapath simulator.
//!
//! This crate translates a textual subset of MIPS-32 assembly into machine words
//! and executes them on a simulated single-cycle processor:
//! 1. **Assembler:** Two-pass label resolution, pseudo-instruction expansion, and bit-exact encoding.
//! 2. **ISA:** Field extraction, decoding into operations, and disassembly.
//! 3. **Core:** Control-signal generation, ALU, syscall service, and the fetch-execute engine.
//! 4. **Memory:** Sparse word/byte addressable store for the data segment and stack.
//! 5. **Simulation:** Source loading, configuration, presenters, statistics, and machine-code output.

/// Two-pass assembler (symbol table, directives, pseudo-instructions, encoder).
pub mod asm;
/// Common types and constants (errors, register file, address map).
pub mod common;
/// Simulator configuration (memory map, step limits, tracing).
pub mod config;
/// Processor core (control signals, ALU, syscalls, execution engine).
pub mod core;
/// Instruction set (opcodes, field extraction, decode, disassembly, ABI names).
pub mod isa;
/// Source loading, presenters, simulator driver, and machine-code sink.
pub mod sim;
/// Sparse memory model.
pub mod soc;
/// Executed-instruction statistics.
pub mod stats;

/// Assembles source lines into a [`asm::Program`].
pub use crate::asm::{Program, assemble};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Fetch-decode-execute engine.
pub use crate::core::Engine;
/// Top-level driver pairing an engine with its configuration.
pub use crate::sim::Simulator;
