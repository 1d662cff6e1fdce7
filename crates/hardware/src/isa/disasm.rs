//! Instruction Disassembler for the MIPS-32 subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for step events, presenters, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x2008_0005); // addi $t0, $zero, 5
//! assert_eq!(text, "addi t0, zero, 5");
//! ```

use crate::isa::abi::register_name as reg;
use crate::isa::decode::decode;
use crate::isa::instruction::{Decoded, Operation};

/// Disassembles an instruction word.
///
/// Branches show their signed word displacement; jumps show the absolute
/// byte address. Returns `"unknown"` for words outside the supported subset.
pub fn disassemble(word: u32) -> String {
    decode(word).map_or_else(|_| "unknown".to_string(), |d| render(&d, None))
}

/// Disassembles an instruction word fetched from `pc`.
///
/// Identical to [`disassemble`] except that branch targets are rendered as
/// absolute byte addresses.
pub fn disassemble_at(word: u32, pc: u32) -> String {
    decode(word).map_or_else(|_| "unknown".to_string(), |d| render(&d, Some(pc)))
}

fn render(d: &Decoded, pc: Option<u32>) -> String {
    let mn = d.op.mnemonic();
    match d.op {
        Operation::Add
        | Operation::Sub
        | Operation::And
        | Operation::Or
        | Operation::Xor
        | Operation::Nor
        | Operation::Slt
        | Operation::Mul => format!("{mn} {}, {}, {}", reg(d.rd), reg(d.rs), reg(d.rt)),
        Operation::Sll | Operation::Srl => {
            format!("{mn} {}, {}, {}", reg(d.rd), reg(d.rt), d.shamt)
        }
        Operation::Jr => format!("{mn} {}", reg(d.rs)),
        Operation::Syscall => mn.to_string(),
        Operation::Addi => format!("{mn} {}, {}, {}", reg(d.rt), reg(d.rs), d.imm_signed()),
        Operation::Andi | Operation::Ori => {
            format!("{mn} {}, {}, {:#x}", reg(d.rt), reg(d.rs), d.imm_unsigned())
        }
        Operation::Lui => format!("{mn} {}, {:#x}", reg(d.rt), d.imm_unsigned()),
        Operation::Lw | Operation::Sw => {
            format!("{mn} {}, {}({})", reg(d.rt), d.imm_signed(), reg(d.rs))
        }
        Operation::Beq | Operation::Bne => match pc {
            Some(pc) => format!(
                "{mn} {}, {}, {:#010x}",
                reg(d.rs),
                reg(d.rt),
                d.branch_address(pc)
            ),
            None => format!("{mn} {}, {}, {}", reg(d.rs), reg(d.rt), d.imm_signed()),
        },
        Operation::J | Operation::Jal => format!("{mn} {:#010x}", d.jump_address()),
    }
}
