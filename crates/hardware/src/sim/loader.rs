//! Source loading.
//!
//! This module supplies assembly source to the assembler. It provides:
//! 1. **Providers:** The [`SourceProvider`] seam with in-memory and file implementations.
//! 2. **Cleaning:** [`clean_line`] strips `#` comments and surrounding whitespace.
//! 3. **Loading:** [`load_program`] reads a provider and assembles it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::asm::{Program, assemble_with};
use crate::common::error::LoadError;
use crate::config::Config;

/// A source of assembly text, one entry per source line.
pub trait SourceProvider {
    /// Returns the raw source lines in order.
    ///
    /// # Errors
    ///
    /// [`LoadError`] when the underlying source cannot be read.
    fn lines(&self) -> Result<Vec<String>, LoadError>;
}

/// In-memory source text.
#[derive(Clone, Debug)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    /// Wraps source text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SourceProvider for TextSource {
    fn lines(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.text.lines().map(str::to_string).collect())
    }
}

/// Source read from a file on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a provider for `path`; the file is read lazily.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SourceProvider for FileSource {
    fn lines(&self) -> Result<Vec<String>, LoadError> {
        let text = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

/// Strips a `#` comment and surrounding whitespace from a line.
///
/// A `#` inside a double-quoted string literal is kept.
pub fn clean_line(line: &str) -> String {
    let mut in_string = false;
    let mut escaped = false;
    let mut end = line.len();
    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '#' if !in_string => {
                end = i;
                break;
            }
            _ => {}
        }
    }
    line[..end].trim().to_string()
}

/// Reads a provider and assembles it with the configured memory layout.
///
/// # Errors
///
/// Propagates the provider's [`LoadError`]. Assembly diagnostics are not
/// errors; they are carried in [`Program::diagnostics`].
pub fn load_program(source: &dyn SourceProvider, config: &Config) -> Result<Program, LoadError> {
    let lines = source.lines()?;
    Ok(assemble_with(&lines, &config.memory))
}
