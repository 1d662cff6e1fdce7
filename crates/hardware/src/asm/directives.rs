//! Assembler directives.
//!
//! Section switches (`.text`, `.data`), symbol visibility (`.globl`, ignored),
//! and the data directives that lay down the initial memory image:
//! `.word` (word-aligned), `.asciiz`, `.ascii`, and `.space`.

use crate::asm::operands::{parse_int_in, parse_string_literal};
use crate::common::constants::WORD_SIZE;
use crate::common::error::EncodingError;
use crate::soc::Memory;

/// Largest `.space` reservation, in bytes.
const MAX_SPACE: i64 = 1 << 20;

/// A parsed directive with its unparsed argument text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `.text`
    Text,
    /// `.data`
    Data,
    /// `.globl` / `.global`
    Global,
    /// `.word v1, v2, ...`
    Word(&'a str),
    /// `.asciiz "..."`
    Asciiz(&'a str),
    /// `.ascii "..."`
    Ascii(&'a str),
    /// `.space n`
    Space(&'a str),
}

impl<'a> Directive<'a> {
    /// Parses a line starting with `.`.
    ///
    /// # Errors
    ///
    /// [`EncodingError::UnknownDirective`] naming the directive.
    pub fn parse(line: &'a str) -> Result<Self, EncodingError> {
        let line = line.trim();
        let (name, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let args = args.trim();
        Ok(match name.to_ascii_lowercase().as_str() {
            ".text" => Self::Text,
            ".data" => Self::Data,
            ".globl" | ".global" => Self::Global,
            ".word" => Self::Word(args),
            ".asciiz" => Self::Asciiz(args),
            ".ascii" => Self::Ascii(args),
            ".space" => Self::Space(args),
            _ => return Err(EncodingError::UnknownDirective(name.to_string())),
        })
    }

    /// Returns `true` for directives that write to the data segment.
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::Word(_) | Self::Asciiz(_) | Self::Ascii(_) | Self::Space(_)
        )
    }

    /// Address at which this directive's first item lands.
    pub const fn align(&self, cursor: u32) -> u32 {
        match self {
            Self::Word(_) => cursor.next_multiple_of(WORD_SIZE),
            _ => cursor,
        }
    }

    /// Writes the directive's data at `cursor` and returns the next free address.
    ///
    /// Nothing is written when any item fails to parse.
    ///
    /// # Errors
    ///
    /// Literal and string errors of the arguments.
    pub fn emit(&self, memory: &mut Memory, cursor: u32) -> Result<u32, EncodingError> {
        let mut addr = self.align(cursor);
        match *self {
            Self::Word(args) => {
                let values = args
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(|t| parse_int_in(t, i64::from(i32::MIN), i64::from(u32::MAX)))
                    .collect::<Result<Vec<_>, _>>()?;
                for v in values {
                    let _ = memory.write_word(addr, v as u32);
                    addr = addr.wrapping_add(WORD_SIZE);
                }
            }
            Self::Asciiz(args) | Self::Ascii(args) => {
                let mut bytes = parse_string_literal(args)?;
                if matches!(self, Self::Asciiz(_)) {
                    bytes.push(0);
                }
                for b in bytes {
                    memory.write_byte(addr, b);
                    addr = addr.wrapping_add(1);
                }
            }
            Self::Space(args) => {
                let n = parse_int_in(args, 0, MAX_SPACE)?;
                for _ in 0..n {
                    memory.write_byte(addr, 0);
                    addr = addr.wrapping_add(1);
                }
            }
            Self::Text | Self::Data | Self::Global => {}
        }
        Ok(addr)
    }
}
