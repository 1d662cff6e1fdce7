//! Execution units of the single-cycle datapath.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
