//! Assembly, decode, and execution error definitions.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Encoding Errors:** Failures localized to a single source instruction; assembly continues.
//! 2. **Decode Errors:** Unrecognized or missing instruction words; fatal to a run.
//! 3. **Execution Errors:** Faults raised while dispatching a decoded instruction; fatal to a run.

use serde::Serialize;
use thiserror::Error;

/// Failure to encode one source instruction or data directive.
///
/// Every variant names the offending token so diagnostics can point at it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The mnemonic is not part of the supported instruction set.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// The register name is not a known ABI name.
    #[error("unknown register `{0}`")]
    UnknownRegister(String),

    /// A numeric register outside `0..=31`.
    #[error("register `{0}` out of range (0-31)")]
    RegisterOutOfRange(String),

    /// A label that was never defined in the program.
    #[error("undefined label `{0}`")]
    UndefinedLabel(String),

    /// A token that does not parse as an integer literal.
    #[error("invalid immediate `{0}`")]
    InvalidImmediate(String),

    /// An integer literal that does not fit the field it is encoded into.
    #[error("immediate `{token}` out of range {min}..={max}")]
    ImmediateOutOfRange {
        /// Offending literal as written.
        token: String,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Wrong number of operands for the mnemonic.
    #[error("`{mnemonic}` expects {expected} operand(s), found {found}")]
    OperandCount {
        /// Mnemonic being encoded.
        mnemonic: String,
        /// Operand count the mnemonic takes.
        expected: usize,
        /// Operand count found in the source.
        found: usize,
    },

    /// A branch target farther than a signed 16-bit word displacement.
    #[error("branch target `{0}` out of range")]
    BranchOutOfRange(String),

    /// A memory operand that is neither `offset(base)` nor a label expression.
    #[error("malformed memory operand `{0}`")]
    MalformedOperand(String),

    /// A directive the assembler does not recognise.
    #[error("unknown directive `{0}`")]
    UnknownDirective(String),

    /// A string directive whose literal is not properly quoted.
    #[error("malformed string literal `{0}`")]
    MalformedString(String),

    /// An instruction appearing in the data section or a data directive in the text section.
    #[error("`{0}` is not valid in the current section")]
    WrongSection(String),
}

/// An [`EncodingError`] attached to the source line it came from.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct AssemblyError {
    /// 1-based source line number.
    pub line: usize,
    /// Cleaned source text of the line.
    pub text: String,
    /// Underlying encoding failure.
    pub source: EncodingError,
}

/// Failure to fetch or decode an instruction word.
///
/// Decode errors are fatal: the engine halts with `HaltReason::DecodeError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
pub enum DecodeError {
    /// The primary opcode is outside the supported table.
    #[error("unknown opcode {opcode:#08b} in word {word:#010x}")]
    UnknownOpcode {
        /// Raw instruction word.
        word: u32,
        /// Extracted opcode field.
        opcode: u32,
    },

    /// The opcode selects a function table but the funct field is unknown.
    #[error("unknown funct {funct:#08b} for opcode {opcode:#08b} in word {word:#010x}")]
    UnknownFunct {
        /// Raw instruction word.
        word: u32,
        /// Extracted opcode field.
        opcode: u32,
        /// Extracted funct field.
        funct: u32,
    },

    /// No valid instruction exists at the program counter.
    ///
    /// Raised when the PC runs past the end of the program, is not word aligned,
    /// or addresses a slot whose source line failed to encode.
    #[error("no instruction at pc {pc:#010x}")]
    NoInstruction {
        /// Program counter that was fetched.
        pc: u32,
    },
}

/// Failure while executing an already-decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
pub enum ExecutionError {
    /// A word load or store at an address that is not 4-byte aligned.
    #[error("misaligned word access at {address:#010x}")]
    MisalignedAccess {
        /// Effective address computed by the instruction.
        address: u32,
    },
}

/// Failure to obtain program source text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("could not read `{path}`: {source}")]
    Io {
        /// Path as given by the caller.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
