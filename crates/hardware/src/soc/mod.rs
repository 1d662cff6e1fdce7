//! Memory subsystem.
//!
//! The simulated machine has no bus or devices: a single sparse store backs
//! the data segment, the stack, and anything a program chooses to address.

/// Sparse word/byte addressable memory.
pub mod memory;

pub use memory::Memory;
