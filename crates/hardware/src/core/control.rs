//! Main Control Unit and ALU Control.
//!
//! This module derives the datapath control signals for a decoded operation. It performs:
//! 1. **Main Control:** Maps each operation to exactly one control category
//!    (R-type ALU, I-type ALU, load, store, branch, jump, syscall).
//! 2. **ALU Control:** Combines `ALUOp` with the operation to pick the ALU function.
//! 3. **Decode Contract:** `decode(word) -> (operation, control signals)`.

use crate::common::error::DecodeError;
use crate::core::signals::{AluFunction, AluOp, ControlSignals};
use crate::isa::decode::operation;
use crate::isa::instruction::Operation;

/// Decodes an instruction word into its operation and control signals.
///
/// # Errors
///
/// Returns the decoder's [`DecodeError`] for words outside the supported subset.
pub fn decode(word: u32) -> Result<(Operation, ControlSignals), DecodeError> {
    let op = operation(word)?;
    Ok((op, control_signals(op)))
}

/// Generates the control signals for an operation.
///
/// This is a pure function of the operation (that is, of opcode and funct).
pub const fn control_signals(op: Operation) -> ControlSignals {
    let mut c = ControlSignals {
        reg_dst: false,
        reg_write: false,
        alu_src: false,
        alu_op: AluOp::Add,
        mem_read: false,
        mem_write: false,
        mem_to_reg: false,
        branch: false,
        jump: false,
        syscall: false,
    };

    match op {
        Operation::Add
        | Operation::Sub
        | Operation::And
        | Operation::Or
        | Operation::Xor
        | Operation::Nor
        | Operation::Slt
        | Operation::Mul
        | Operation::Sll
        | Operation::Srl => {
            c.reg_dst = true;
            c.reg_write = true;
            c.alu_op = AluOp::Funct;
        }
        Operation::Jr | Operation::J => {
            c.jump = true;
        }
        Operation::Jal => {
            c.jump = true;
            c.reg_write = true;
        }
        Operation::Syscall => {
            c.syscall = true;
        }
        Operation::Addi | Operation::Andi | Operation::Ori => {
            c.alu_src = true;
            c.reg_write = true;
        }
        Operation::Lui => {
            c.alu_src = true;
            c.reg_write = true;
            c.alu_op = AluOp::Lui;
        }
        Operation::Lw => {
            c.alu_src = true;
            c.reg_write = true;
            c.mem_read = true;
            c.mem_to_reg = true;
        }
        Operation::Sw => {
            c.alu_src = true;
            c.mem_write = true;
        }
        Operation::Beq | Operation::Bne => {
            c.branch = true;
            c.alu_op = AluOp::Branch;
        }
    }

    c
}

/// Resolves the ALU function for an operation under the given `ALUOp`.
///
/// `ALUOp=00` adds except for the logical immediates, `01` subtracts,
/// `10` follows the funct field, and `11` shifts the immediate into the upper half.
pub const fn alu_function(alu_op: AluOp, op: Operation) -> AluFunction {
    match alu_op {
        AluOp::Add => match op {
            Operation::Andi => AluFunction::And,
            Operation::Ori => AluFunction::Or,
            _ => AluFunction::Add,
        },
        AluOp::Branch => AluFunction::Sub,
        AluOp::Lui => AluFunction::Lui,
        AluOp::Funct => match op {
            Operation::Sub => AluFunction::Sub,
            Operation::And => AluFunction::And,
            Operation::Or => AluFunction::Or,
            Operation::Xor => AluFunction::Xor,
            Operation::Nor => AluFunction::Nor,
            Operation::Slt => AluFunction::Slt,
            Operation::Mul => AluFunction::Mul,
            Operation::Sll => AluFunction::Sll,
            Operation::Srl => AluFunction::Srl,
            _ => AluFunction::Add,
        },
    }
}
