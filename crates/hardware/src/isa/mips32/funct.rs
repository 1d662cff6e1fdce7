//! MIPS-32 Function Codes.
//!
//! Function codes (bits 5-0) distinguishing operations that share
//! the `SPECIAL` or `SPECIAL2` primary opcode.

/// Shift left logical (SLL).
pub const SLL: u32 = 0b000000;

/// Shift right logical (SRL).
pub const SRL: u32 = 0b000010;

/// Jump register (JR).
pub const JR: u32 = 0b001000;

/// System call (SYSCALL).
pub const SYSCALL: u32 = 0b001100;

/// Add (ADD).
pub const ADD: u32 = 0b100000;

/// Subtract (SUB).
pub const SUB: u32 = 0b100010;

/// Bitwise AND (AND).
pub const AND: u32 = 0b100100;

/// Bitwise OR (OR).
pub const OR: u32 = 0b100101;

/// Bitwise XOR (XOR).
pub const XOR: u32 = 0b100110;

/// Bitwise NOR (NOR).
pub const NOR: u32 = 0b100111;

/// Set on less than, signed (SLT).
pub const SLT: u32 = 0b101010;

/// Multiply, low 32 bits (MUL) under `SPECIAL2`.
pub const MUL: u32 = 0b000010;
