//! Step observers.
//!
//! The engine never prints. A driver hands a [`Presenter`] to the
//! [`Simulator`](crate::sim::Simulator), which notifies it after every step
//! with the post-step register file and memory.

use crate::common::reg::RegisterFile;
use crate::core::{HaltReason, StepEvent};
use crate::soc::Memory;
use crate::stats::SimStats;

/// Receives per-step notifications from the simulator.
pub trait Presenter {
    /// Called after each executed step with the post-step state.
    fn on_step(&mut self, event: &StepEvent, registers: &RegisterFile, memory: &Memory);

    /// Called once when the engine halts.
    fn on_halt(&mut self, _reason: HaltReason, _stats: &SimStats) {}
}

/// Presenter that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn on_step(&mut self, _event: &StepEvent, _registers: &RegisterFile, _memory: &Memory) {}
}
