//! Sparse System Memory.
//!
//! This module implements the simulated memory as a sparse map from address
//! to value. It provides:
//! 1. **Word access:** 32-bit cells used by `lw`/`sw` and `.word`.
//! 2. **Byte access:** low byte of a cell, used by `.asciiz` and string syscalls.
//! 3. **Inspection:** ordered iteration over every touched address.
//!
//! Each address is an independent cell. A byte write stores the byte as the
//! whole cell value and a byte read returns the low 8 bits of the cell, so a
//! string laid down by `.asciiz` occupies one cell per character. Addresses
//! that were never written read as zero.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Lowest byte value rendered as a character in memory dumps.
const PRINTABLE_MIN: u32 = 0x20;

/// Highest byte value rendered as a character in memory dumps.
const PRINTABLE_MAX: u32 = 0x7E;

/// Sparse memory store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Memory {
    cells: BTreeMap<u32, u32>,
}

impl Memory {
    /// Creates an empty memory where every address reads as zero.
    pub const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Reads the word cell at `addr` (0 if never written).
    pub fn read_word(&self, addr: u32) -> u32 {
        self.cells.get(&addr).copied().unwrap_or(0)
    }

    /// Writes a word cell, returning the previous value.
    pub fn write_word(&mut self, addr: u32, val: u32) -> u32 {
        self.cells.insert(addr, val).unwrap_or(0)
    }

    /// Reads the low byte of the cell at `addr`.
    pub fn read_byte(&self, addr: u32) -> u8 {
        (self.read_word(addr) & 0xFF) as u8
    }

    /// Writes a byte cell.
    pub fn write_byte(&mut self, addr: u32, val: u8) {
        let _ = self.cells.insert(addr, u32::from(val));
    }

    /// Reads a zero-terminated string starting at `addr`.
    ///
    /// Walks one cell per character and stops at the first zero byte or after
    /// `limit` characters, whichever comes first.
    pub fn read_cstring(&self, addr: u32, limit: usize) -> String {
        let mut out = String::new();
        let mut cursor = addr;
        for _ in 0..limit {
            let byte = self.read_byte(cursor);
            if byte == 0 {
                break;
            }
            out.push(char::from(byte));
            cursor = cursor.wrapping_add(1);
        }
        out
    }

    /// Iterates over touched addresses in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells.iter().map(|(&a, &v)| (a, v))
    }

    /// Number of touched addresses.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no address has been written.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (addr, val) in self.iter() {
            if (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&val) {
                writeln!(f, "[{addr:#010x}] = {val:#010x} '{}'", char::from(val as u8))?;
            } else {
                writeln!(f, "[{addr:#010x}] = {val:#010x} ({})", val as i32)?;
            }
        }
        Ok(())
    }
}
