//! Simulator driver.
//!
//! Pairs an [`Engine`] with its [`Config`] and paces it: one step at a time
//! (`step_once`) or until it halts or reaches `general.max_steps` (`run`).

use crate::asm::Program;
use crate::config::Config;
use crate::core::{Engine, HaltReason, StepEvent};
use crate::sim::presenter::Presenter;

/// How a call to [`Simulator::run`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The engine halted.
    Halted(HaltReason),
    /// `max_steps` instructions ran without a halt; the engine is still running.
    StepLimit {
        /// Steps executed by this call.
        steps: u64,
    },
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    engine: Engine,
    config: Config,
}

impl Simulator {
    /// Creates a simulator for an assembled program.
    pub fn new(program: &Program, config: Config) -> Self {
        Self {
            engine: Engine::new(program, &config),
            config,
        }
    }

    /// The engine being driven.
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Executes one instruction and notifies the presenter.
    pub fn step_once(&mut self, presenter: &mut dyn Presenter) -> StepEvent {
        let was_halted = self.engine.is_halted();
        let event = self.engine.step();
        if was_halted {
            return event;
        }
        presenter.on_step(&event, self.engine.registers(), self.engine.memory());
        if let Some(reason) = self.engine.halt_reason() {
            presenter.on_halt(reason, self.engine.stats());
        }
        event
    }

    /// Runs until the engine halts or the configured step limit is reached.
    pub fn run(&mut self, presenter: &mut dyn Presenter) -> RunOutcome {
        let limit = self.config.general.max_steps;
        let mut steps = 0_u64;
        loop {
            if let Some(reason) = self.engine.halt_reason() {
                return RunOutcome::Halted(reason);
            }
            if limit.is_some_and(|max| steps >= max) {
                tracing::info!(steps, "step limit reached");
                return RunOutcome::StepLimit { steps };
            }
            let _ = self.step_once(presenter);
            steps += 1;
        }
    }
}
