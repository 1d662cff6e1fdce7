//! Configuration system for the MIPS simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline memory map (data segment base, initial stack pointer).
//! 2. **Structures:** Hierarchical config for general run control and memory layout.
//!
//! Configuration is supplied as JSON (the CLI's `--config` flag) or built with
//! `Config::default()`. Every field is optional in JSON and falls back to its default.

use serde::{Deserialize, Serialize};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// First address of the data segment (`.data` directives start here).
    pub const DATA_BASE: u32 = constants::DATA_BASE;

    /// Value of `$sp` at program start.
    pub const INITIAL_SP: u32 = constants::STACK_POINTER_INIT;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 500 },
///     "memory": { "data_base": 268500992 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(500));
/// assert_eq!(config.memory.data_base, 0x1001_0000);
/// assert_eq!(config.memory.initial_sp, 0x7FFF_FFFC);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit a trace line per executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Upper bound on instructions executed by a run-to-completion call.
    /// `None` runs until the engine halts.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Memory layout configuration.
///
/// Code always starts at address 0; only the data segment and stack move.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// Base address of the data segment
    #[serde(default = "MemoryConfig::default_data_base")]
    pub data_base: u32,

    /// Initial stack pointer
    #[serde(default = "MemoryConfig::default_initial_sp")]
    pub initial_sp: u32,
}

impl MemoryConfig {
    const fn default_data_base() -> u32 {
        defaults::DATA_BASE
    }

    const fn default_initial_sp() -> u32 {
        defaults::INITIAL_SP
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_base: defaults::DATA_BASE,
            initial_sp: defaults::INITIAL_SP,
        }
    }
}
