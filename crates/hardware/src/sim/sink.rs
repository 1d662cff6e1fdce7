//! Machine-code sink.
//!
//! Writes the encoded words of a program, one per line, in program order
//! including pseudo-instruction expansions. Invalid slots are omitted.

use std::io::{self, Write};

use crate::asm::Program;

/// Text format of each emitted word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordFormat {
    /// 32-character bit string.
    #[default]
    Binary,
    /// `0x`-prefixed, 8 hex digits.
    Hex,
}

impl WordFormat {
    /// Renders one word.
    pub fn render(self, word: u32) -> String {
        match self {
            Self::Binary => format!("{word:032b}"),
            Self::Hex => format!("{word:#010x}"),
        }
    }
}

/// Writes the program's machine code and returns the number of words written.
///
/// # Errors
///
/// Propagates writer I/O errors.
pub fn write_machine_code<W: Write>(
    program: &Program,
    mut writer: W,
    format: WordFormat,
) -> io::Result<usize> {
    let mut count = 0;
    for word in program.machine_words() {
        writeln!(writer, "{}", format.render(word))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
