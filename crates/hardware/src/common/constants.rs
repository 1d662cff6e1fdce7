//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Address Map:** Base addresses for the text segment, data segment, and stack.
//! 2. **Instruction Constants:** Word size and immediate ranges for encoding.
//! 3. **Syscall Constants:** Service numbers understood by the syscall handler.

/// Address of the first instruction slot.
pub const TEXT_BASE: u32 = 0x0000_0000;

/// Address where the `.data` segment starts.
pub const DATA_BASE: u32 = 0x1001_0000;

/// Initial value of the stack pointer (`$sp`).
pub const STACK_POINTER_INIT: u32 = 0x7FFF_FFFC;

/// Size of one instruction or memory word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Smallest immediate accepted by 16-bit immediate fields (signed view).
pub const IMM16_MIN: i64 = -32768;

/// Largest immediate accepted by 16-bit immediate fields (unsigned view).
pub const IMM16_MAX: i64 = 65535;

/// Largest signed 16-bit offset for loads and stores.
pub const OFFSET16_MAX: i64 = 32767;

/// Mask for the low half-word of a register value.
pub const LOW_HALF_MASK: u32 = 0xFFFF;

/// Mask for the 26-bit jump target field.
pub const JUMP_TARGET_MASK: u32 = 0x03FF_FFFF;

/// Syscall number: print the integer held in `$a0`.
pub const SYSCALL_PRINT_INT: u32 = 1;

/// Syscall number: print the zero-terminated string addressed by `$a0`.
pub const SYSCALL_PRINT_STRING: u32 = 4;

/// Syscall number: terminate the program.
pub const SYSCALL_EXIT: u32 = 10;

/// Upper bound on bytes read by the print-string syscall before giving up.
pub const MAX_STRING_LEN: usize = 64 * 1024;
