//! Forest-Fire Simulation Core Library
//!
//! Discrete-time fire spread on a 2D grid. Cells progress one way from
//! alive to burning to dead; each tick, every burning cell gets one
//! probability draw per alive 4-connected neighbor and then burns out.
//! Cells ignited within a tick never spread in that same tick.
//!
//! The core is deliberately synchronous and single-threaded. Rendering,
//! tick scheduling, and randomness are injected collaborators
//! ([`RenderObserver`], [`Scheduler`], [`rand::RngCore`]), which keeps the
//! step function a pure function of its inputs and unit-testable without
//! timers or a display.

pub mod cell;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod observer;
pub mod scheduler;

// Re-export the control surface
pub use cell::{Cell, CellStatus};
pub use config::{RunConfig, SimulationConfig};
pub use controller::{ControllerState, SimulationController, DEFAULT_TICK_INTERVAL};
pub use engine::{CellChange, FireSpreadEngine, StepReport};
pub use error::{ConfigError, InvalidTransition, OutOfBounds, SimulationError};
pub use grid::Grid;
pub use observer::{ChangeLog, RenderObserver};
pub use scheduler::{ManualScheduler, Scheduler, SchedulerHandle};
