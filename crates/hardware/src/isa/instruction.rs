//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the three MIPS-32 formats (MSB→LSB):
//!
//! ```text
//! R-type: opcode(6) | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)
//! I-type: opcode(6) | rs(5) | rt(5) | immediate(16)
//! J-type: opcode(6) | target(26)
//! ```
//!
//! and the closed [`Operation`] set shared by the assembler and the engine.

use std::fmt;

use crate::isa::mips32::{funct, opcodes};

/// Bit shift of the opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit shift of the `rs` field (bits 25-21).
pub const RS_SHIFT: u32 = 21;
/// Bit shift of the `rt` field (bits 20-16).
pub const RT_SHIFT: u32 = 16;
/// Bit shift of the `rd` field (bits 15-11).
pub const RD_SHIFT: u32 = 11;
/// Bit shift of the `shamt` field (bits 10-6).
pub const SHAMT_SHIFT: u32 = 6;

/// Mask for the 6-bit opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Mask for any 5-bit register or shift-amount field after shifting.
pub const REG_MASK: u32 = 0x1F;
/// Mask for the 6-bit funct field.
pub const FUNCT_MASK: u32 = 0x3F;
/// Mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source / I-type destination field (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register field (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the funct field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate field (bits 15-0).
    fn imm16(&self) -> u16;

    /// Extracts the 26-bit jump target field (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Instruction encoding format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register.
    R,
    /// Immediate.
    I,
    /// Absolute jump.
    J,
}

/// Every machine operation in the supported subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `add rd, rs, rt`
    Add,
    /// `sub rd, rs, rt`
    Sub,
    /// `and rd, rs, rt`
    And,
    /// `or rd, rs, rt`
    Or,
    /// `xor rd, rs, rt`
    Xor,
    /// `nor rd, rs, rt`
    Nor,
    /// `slt rd, rs, rt`
    Slt,
    /// `mul rd, rs, rt`
    Mul,
    /// `sll rd, rt, shamt`
    Sll,
    /// `srl rd, rt, shamt`
    Srl,
    /// `jr rs`
    Jr,
    /// `syscall`
    Syscall,
    /// `addi rt, rs, imm`
    Addi,
    /// `andi rt, rs, imm`
    Andi,
    /// `ori rt, rs, imm`
    Ori,
    /// `lui rt, imm`
    Lui,
    /// `lw rt, offset(rs)`
    Lw,
    /// `sw rt, offset(rs)`
    Sw,
    /// `beq rs, rt, label`
    Beq,
    /// `bne rs, rt, label`
    Bne,
    /// `j label`
    J,
    /// `jal label`
    Jal,
}

impl Operation {
    /// All operations, in opcode-table order.
    pub const ALL: [Self; 22] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nor,
        Self::Slt,
        Self::Mul,
        Self::Sll,
        Self::Srl,
        Self::Jr,
        Self::Syscall,
        Self::Addi,
        Self::Andi,
        Self::Ori,
        Self::Lui,
        Self::Lw,
        Self::Sw,
        Self::Beq,
        Self::Bne,
        Self::J,
        Self::Jal,
    ];

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Slt => "slt",
            Self::Mul => "mul",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Jr => "jr",
            Self::Syscall => "syscall",
            Self::Addi => "addi",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Lui => "lui",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::J => "j",
            Self::Jal => "jal",
        }
    }

    /// Looks up an operation by mnemonic (already lower-cased).
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == mnemonic)
    }

    /// Primary opcode.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Add
            | Self::Sub
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Nor
            | Self::Slt
            | Self::Sll
            | Self::Srl
            | Self::Jr
            | Self::Syscall => opcodes::OP_SPECIAL,
            Self::Mul => opcodes::OP_SPECIAL2,
            Self::Addi => opcodes::OP_ADDI,
            Self::Andi => opcodes::OP_ANDI,
            Self::Ori => opcodes::OP_ORI,
            Self::Lui => opcodes::OP_LUI,
            Self::Lw => opcodes::OP_LW,
            Self::Sw => opcodes::OP_SW,
            Self::Beq => opcodes::OP_BEQ,
            Self::Bne => opcodes::OP_BNE,
            Self::J => opcodes::OP_J,
            Self::Jal => opcodes::OP_JAL,
        }
    }

    /// Function code for register-register operations, `None` otherwise.
    pub const fn funct(self) -> Option<u32> {
        match self {
            Self::Add => Some(funct::ADD),
            Self::Sub => Some(funct::SUB),
            Self::And => Some(funct::AND),
            Self::Or => Some(funct::OR),
            Self::Xor => Some(funct::XOR),
            Self::Nor => Some(funct::NOR),
            Self::Slt => Some(funct::SLT),
            Self::Mul => Some(funct::MUL),
            Self::Sll => Some(funct::SLL),
            Self::Srl => Some(funct::SRL),
            Self::Jr => Some(funct::JR),
            Self::Syscall => Some(funct::SYSCALL),
            _ => None,
        }
    }

    /// Encoding format.
    pub const fn format(self) -> Format {
        match self {
            Self::J | Self::Jal => Format::J,
            _ if self.funct().is_some() => Format::R,
            _ => Format::I,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Every field is extracted regardless of format; consumers pick the ones
/// meaningful for [`Decoded::op`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Resolved operation.
    pub op: Operation,
    /// First source register index.
    pub rs: usize,
    /// Second source register (destination for I-type).
    pub rt: usize,
    /// R-type destination register index.
    pub rd: usize,
    /// Shift amount.
    pub shamt: u32,
    /// Raw 16-bit immediate.
    pub imm: u16,
    /// Raw 26-bit jump target field.
    pub target: u32,
}

impl Decoded {
    /// Immediate sign-extended to 32 bits.
    #[inline]
    pub const fn imm_signed(&self) -> i32 {
        self.imm as i16 as i32
    }

    /// Immediate zero-extended to 32 bits.
    #[inline]
    pub const fn imm_unsigned(&self) -> u32 {
        self.imm as u32
    }

    /// Absolute jump destination: the target field shifted to a byte address.
    #[inline]
    pub const fn jump_address(&self) -> u32 {
        self.target << 2
    }

    /// Taken-branch destination for an instruction fetched at `pc`.
    ///
    /// The displacement is relative to `pc + 4`.
    #[inline]
    pub const fn branch_address(&self, pc: u32) -> u32 {
        pc.wrapping_add(4)
            .wrapping_add((self.imm_signed() << 2) as u32)
    }
}
