//! # Core Unit Tests

/// ALU function table.
pub mod alu;


/// Engine state machine, dispatch paths, and end-to-end programs.
pub mod engine;
