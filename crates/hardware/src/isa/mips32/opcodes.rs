//! MIPS-32 Primary Opcodes.
//!
//! Defines the primary opcodes (bits 31-26) of the supported subset.

/// Register-register operations selected by the funct field (R-type sentinel).
pub const OP_SPECIAL: u32 = 0b000000;

/// Jump (J).
pub const OP_J: u32 = 0b000010;

/// Jump and link (JAL).
pub const OP_JAL: u32 = 0b000011;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0b000100;

/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 0b000101;

/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0b001000;

/// AND immediate (ANDI).
pub const OP_ANDI: u32 = 0b001100;

/// OR immediate (ORI).
pub const OP_ORI: u32 = 0b001101;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0b001111;

/// Second register-register table; holds MUL.
pub const OP_SPECIAL2: u32 = 0b011100;

/// Load word (LW).
pub const OP_LW: u32 = 0b100011;

/// Store word (SW).
pub const OP_SW: u32 = 0b101011;
