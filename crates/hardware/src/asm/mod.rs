//! Two-pass MIPS-32 assembler.
//!
//! This module turns source lines into a [`Program`]. It performs:
//! 1. **Pass 1:** Cleans each line, binds labels, switches sections, lays down
//!    the data image, and plans how many 4-byte slots each instruction needs
//!    (pseudo-instructions may take two).
//! 2. **Pass 2:** Encodes every planned instruction against the complete
//!    symbol table. Labels therefore always carry final, post-expansion addresses.
//!
//! Failures are collected per line in [`Program::diagnostics`]; a failing
//! instruction still reserves its planned slots so later addresses do not drift.

/// Assembler directives and the data image writer.
pub mod directives;
/// Instruction word packing.
pub mod encode;
/// Operand lexing and parsing.
pub mod operands;
/// Assembled program image.
pub mod program;
/// `li`, `la`, and label load/store expansion.
pub mod pseudo;
/// Label table.
pub mod symbols;

pub use self::encode::EncodedUnit;
pub use self::program::{InstructionRecord, Program};
pub use self::symbols::SymbolTable;

use crate::asm::directives::Directive;
use crate::asm::encode::encode;
use crate::asm::operands::{is_identifier, split_instruction};
use crate::common::constants::{TEXT_BASE, WORD_SIZE};
use crate::common::error::{AssemblyError, EncodingError};
use crate::config::MemoryConfig;
use crate::sim::loader::clean_line;

/// Assembles source lines with the default memory layout.
///
/// Lines may still contain `#` comments; they are cleaned here.
///
/// # Examples
///
/// ```
/// use mipsim_core::assemble;
///
/// let program = assemble(&["addi $t0, $zero, 5", "li $t1, 0x12345678"]);
/// assert!(program.is_ok());
/// assert_eq!(program.machine_words().count(), 3);
/// ```
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Program {
    assemble_with(lines, &MemoryConfig::default())
}

/// Assembles source lines, placing the data segment at `layout.data_base`.
pub fn assemble_with<S: AsRef<str>>(lines: &[S], layout: &MemoryConfig) -> Program {
    let mut asm = Assembler::new(layout.data_base);
    for (idx, raw) in lines.iter().enumerate() {
        asm.scan(idx + 1, raw.as_ref());
    }
    asm.finish()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Text,
    Data,
}

/// An instruction recorded in pass 1, waiting for encoding.
#[derive(Debug)]
struct Pending {
    line: usize,
    text: String,
    address: u32,
    slots: u32,
}

#[derive(Debug)]
struct Assembler {
    section: Section,
    pc: u32,
    data_cursor: u32,
    program: Program,
    pending: Vec<Pending>,
    /// Bare data-section labels waiting for the next data directive.
    data_labels: Vec<String>,
}

impl Assembler {
    fn new(data_base: u32) -> Self {
        Self {
            section: Section::Text,
            pc: TEXT_BASE,
            data_cursor: data_base,
            program: Program::default(),
            pending: Vec::new(),
            data_labels: Vec::new(),
        }
    }

    const fn here(&self) -> u32 {
        match self.section {
            Section::Text => self.pc,
            Section::Data => self.data_cursor,
        }
    }

    fn report(&mut self, line: usize, text: &str, source: EncodingError) {
        let err = AssemblyError {
            line,
            text: text.to_string(),
            source,
        };
        tracing::warn!(%err, "assembly diagnostic");
        self.program.diagnostics.push(err);
    }

    /// Binds `labels`, and any deferred data labels, to `addr`.
    fn bind(&mut self, labels: &[&str], addr: u32) {
        for label in std::mem::take(&mut self.data_labels) {
            let _ = self.program.symbols.define(&label, addr);
        }
        for label in labels {
            let _ = self.program.symbols.define(label, addr);
        }
    }

    /// Holds data-section labels until the next directive fixes their alignment.
    fn defer(&mut self, labels: &[&str]) {
        self.data_labels.extend(labels.iter().map(|l| (*l).to_string()));
    }

    /// Pass 1 over a single source line.
    fn scan(&mut self, line: usize, raw: &str) {
        let text = clean_line(raw);
        if text.is_empty() {
            return;
        }

        let mut rest = text.as_str();
        let mut labels = Vec::new();
        while let Some((label, tail)) = split_label(rest) {
            labels.push(label);
            rest = tail;
        }

        if rest.starts_with('.') {
            self.scan_directive(line, &text, rest, &labels);
            return;
        }

        if rest.is_empty() {
            if self.section == Section::Data {
                self.defer(&labels);
            } else {
                self.bind(&labels, self.here());
            }
            return;
        }
        self.bind(&labels, self.here());

        let (mnemonic, operands) = split_instruction(rest);
        if self.section == Section::Data {
            self.report(line, &text, EncodingError::WrongSection(mnemonic));
            return;
        }

        let slots = pseudo::planned_slots(&mnemonic, &operands);
        self.pending.push(Pending {
            line,
            text: rest.to_string(),
            address: self.pc,
            slots,
        });
        self.pc = self.pc.wrapping_add(slots * WORD_SIZE);
    }

    fn scan_directive(&mut self, line: usize, text: &str, rest: &str, labels: &[&str]) {
        let directive = match Directive::parse(rest) {
            Ok(d) => d,
            Err(e) => {
                self.bind(labels, self.here());
                self.report(line, text, e);
                return;
            }
        };

        match directive {
            Directive::Text if self.section == Section::Data => {
                self.bind(&[], self.data_cursor);
                self.section = Section::Text;
            }
            Directive::Global if self.section == Section::Data => {
                self.defer(labels);
                return;
            }
            Directive::Text => self.section = Section::Text,
            Directive::Data => self.section = Section::Data,
            _ => {}
        }

        if !directive.is_data() {
            self.bind(labels, self.here());
            return;
        }

        if self.section == Section::Text {
            self.bind(labels, self.here());
            let name = rest.split_whitespace().next().unwrap_or(rest).to_string();
            self.report(line, text, EncodingError::WrongSection(name));
            return;
        }

        self.bind(labels, directive.align(self.data_cursor));
        match directive.emit(&mut self.program.memory, self.data_cursor) {
            Ok(next) => self.data_cursor = next,
            Err(e) => self.report(line, text, e),
        }
    }

    /// Pass 2: encodes every pending instruction.
    fn finish(mut self) -> Program {
        let cursor = self.data_cursor;
        self.bind(&[], cursor);
        let pending = std::mem::take(&mut self.pending);
        for p in pending {
            let (mnemonic, operands) = split_instruction(&p.text);
            let unit = match encode(&mnemonic, &operands, p.address, &self.program.symbols) {
                Ok(unit) => unit,
                Err(e) => {
                    self.report(p.line, &p.text, e);
                    EncodedUnit::Invalid
                }
            };

            let words = unit.words();
            for i in 0..p.slots {
                self.program.instructions.push(InstructionRecord {
                    line: p.line,
                    text: p.text.clone(),
                    address: p.address.wrapping_add(i * WORD_SIZE),
                    word: words.get(i as usize).copied(),
                });
            }
        }
        self.program
    }
}

/// Splits a leading `label:` off a line.
///
/// A colon only introduces a label when everything before it is a valid
/// identifier, so `:` inside a string literal is left alone.
fn split_label(line: &str) -> Option<(&str, &str)> {
    let (head, tail) = line.split_once(':')?;
    let label = head.trim();
    is_identifier(label).then(|| (label, tail.trim()))
}
