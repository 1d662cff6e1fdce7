//! Assembled program image.

use serde::Serialize;

use crate::asm::symbols::SymbolTable;
use crate::common::constants::{TEXT_BASE, WORD_SIZE};
use crate::common::error::AssemblyError;
use crate::soc::Memory;

/// One 4-byte code slot.
///
/// A pseudo-instruction that expands to two words yields two records sharing
/// the same source line. A line that failed to encode keeps its slots with
/// `word == None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InstructionRecord {
    /// 1-based source line number.
    pub line: usize,
    /// Cleaned source text.
    pub text: String,
    /// Address of this slot.
    pub address: u32,
    /// Encoded word, or `None` if the line failed to encode.
    pub word: Option<u32>,
}

/// Output of the assembler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Code slots in address order, starting at address 0.
    pub instructions: Vec<InstructionRecord>,
    /// Resolved labels.
    pub symbols: SymbolTable,
    /// Initial memory image built from data directives.
    pub memory: Memory,
    /// Per-line assembly failures, in source order.
    pub diagnostics: Vec<AssemblyError>,
}

impl Program {
    /// Encoded words in program order, skipping invalid slots.
    pub fn machine_words(&self) -> impl Iterator<Item = u32> + '_ {
        self.instructions.iter().filter_map(|r| r.word)
    }

    /// Returns `true` if every line assembled cleanly.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Index of the code slot at `pc`, or `None` below the text base or off a word boundary.
pub(crate) const fn slot_index(pc: u32) -> Option<usize> {
    match pc.checked_sub(TEXT_BASE) {
        Some(offset) if offset % WORD_SIZE == 0 => Some((offset / WORD_SIZE) as usize),
        _ => None,
    }
}
