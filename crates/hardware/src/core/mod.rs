//! Processor core.
//!
//! This module contains the single-cycle datapath: control-signal generation,
//! the ALU, the syscall service, and the engine that sequences them.

/// Main control and ALU control.
pub mod control;

/// Fetch-decode-execute engine.
pub mod engine;

/// Control signal definitions.
pub mod signals;

/// Syscall service.
pub mod syscall;

/// Execution units (ALU).
pub mod units;

pub use self::engine::{Engine, EngineState, HaltReason, Snapshot, StepEvent};
