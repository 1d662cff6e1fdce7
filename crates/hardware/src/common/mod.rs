//! Common utilities and types used throughout the MIPS simulator.
//!
//! This module provides the building blocks shared by the assembler and the engine:
//! 1. **Constants:** Address map, word size, and syscall numbers.
//! 2. **Error Handling:** Encoding, decoding, and execution error taxonomies.
//! 3. **Register Management:** The 32-entry general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for assembly, decode, and execution.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{DATA_BASE, STACK_POINTER_INIT, TEXT_BASE, WORD_SIZE};
pub use error::{AssemblyError, DecodeError, EncodingError, ExecutionError, LoadError};
pub use reg::RegisterFile;
