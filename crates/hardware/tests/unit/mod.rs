//! # Unit Components
//!
//! Tests organized to mirror the crate's source modules.


/// Control signals, ALU, syscalls, and the execution engine.
pub mod core;

/// Decoder and disassembler.
pub mod isa;


/// Configuration parsing and defaults.
pub mod config;
