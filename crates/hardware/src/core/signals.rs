//! Datapath control signals and operation types.
//!
//! This module defines the signals that steer a single-cycle datapath. It performs:
//! 1. **ALU Control:** The two-bit `ALUOp` selector and the ALU function it resolves to.
//! 2. **Operand Selection:** Register versus immediate for the second ALU input.
//! 3. **Memory Control:** Read/write enables and the memory-to-register mux.
//! 4. **Flow Control:** Branch, jump, and syscall dispatch flags.

use std::fmt;

use serde::Serialize;

/// Two-bit ALU operation selector produced by the main control unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// `00`: add (immediate arithmetic, address calculation).
    #[default]
    Add,

    /// `01`: subtract for branch comparison.
    Branch,

    /// `10`: function selected by the funct field (R-type).
    Funct,

    /// `11`: load upper immediate.
    Lui,
}

impl AluOp {
    /// Two-character bit pattern as drawn on datapath diagrams.
    pub const fn bits(self) -> &'static str {
        match self {
            Self::Add => "00",
            Self::Branch => "01",
            Self::Funct => "10",
            Self::Lui => "11",
        }
    }
}

impl Serialize for AluOp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.bits())
    }
}

/// Operation performed by the ALU once `ALUOp` and funct are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluFunction {
    /// Default value (addition).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Bitwise NOR.
    Nor,

    /// Set less than (signed).
    Slt,

    /// Integer multiply (low 32 bits).
    Mul,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Pass operand B shifted into the upper half-word.
    Lui,
}

/// Control signals for one instruction.
///
/// Computed purely from opcode/funct. Carries control intent only, never operand values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControlSignals {
    /// Destination register comes from `rd` (R-type) instead of `rt`.
    pub reg_dst: bool,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Second ALU operand is the immediate instead of `rt`.
    #[serde(rename = "ALUSrc")]
    pub alu_src: bool,
    /// ALU operation selector.
    #[serde(rename = "ALUOp")]
    pub alu_op: AluOp,
    /// Enable memory read (load).
    pub mem_read: bool,
    /// Enable memory write (store).
    pub mem_write: bool,
    /// Register write data comes from memory instead of the ALU.
    #[serde(rename = "MemtoReg")]
    pub mem_to_reg: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump.
    pub jump: bool,
    /// Instruction is a system call.
    pub syscall: bool,
}

impl fmt::Display for ControlSignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = |v: bool| u8::from(v);
        write!(
            f,
            "RegDst={} RegWrite={} ALUSrc={} ALUOp={} MemRead={} MemWrite={} MemtoReg={} Branch={} Jump={} Syscall={}",
            b(self.reg_dst),
            b(self.reg_write),
            b(self.alu_src),
            self.alu_op.bits(),
            b(self.mem_read),
            b(self.mem_write),
            b(self.mem_to_reg),
            b(self.branch),
            b(self.jump),
            b(self.syscall),
        )
    }
}
