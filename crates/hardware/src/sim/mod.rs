//! Simulation driver and peripheral collaborators.
//!
//! Provides source loading, the presenter seam, the simulator that paces the
//! engine, and the machine-code sink.

/// Source providers and line cleaning.
pub mod loader;

/// Step observers.
pub mod presenter;

/// Simulator driver.
pub mod simulator;

/// Machine-code output.
pub mod sink;

pub use self::presenter::{NullPresenter, Presenter};
pub use self::simulator::{RunOutcome, Simulator};
