//! Simulation lifecycle: initialize, begin, tick, stop, reset
//!
//! The controller owns the current run (grid, probability, tick count) and
//! orchestrates the engine against it. Timing is not its business: it
//! registers one periodic cadence with the injected [`Scheduler`] when a
//! run starts, and whatever drives that scheduler calls `tick()`. The
//! injected RNG is never seeded here, so deterministic replay is entirely
//! the caller's choice.

use std::time::Duration;

use rand::RngCore;
use tracing::{debug, info, warn};

use crate::cell::CellStatus;
use crate::config::SimulationConfig;
use crate::engine::{FireSpreadEngine, StepReport};
use crate::error::SimulationError;
use crate::grid::Grid;
use crate::observer::RenderObserver;
use crate::scheduler::{Scheduler, SchedulerHandle};

/// Tick cadence requested from the scheduler unless overridden.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No run exists; awaiting configuration
    Uninitialized,
    /// Grid built from a valid configuration, run not yet started
    Ready,
    /// Run in progress, periodic ticking registered
    Running,
    /// Ticking cancelled, final grid kept for inspection
    Stopped,
}

impl ControllerState {
    fn name(self) -> &'static str {
        match self {
            ControllerState::Uninitialized => "uninitialized",
            ControllerState::Ready => "ready",
            ControllerState::Running => "running",
            ControllerState::Stopped => "stopped",
        }
    }
}

/// One simulation run: the grid plus its fixed parameters.
struct SimulationRun {
    grid: Grid,
    probability: f32,
    init_tiles: Vec<(usize, usize)>,
    started: bool,
    tick_count: u64,
}

/// Owns the run lifecycle and exposes the control surface to external
/// callers (schedulers, UIs).
pub struct SimulationController {
    engine: FireSpreadEngine,
    scheduler: Box<dyn Scheduler>,
    rng: Box<dyn RngCore>,
    observer: Option<Box<dyn RenderObserver>>,
    run: Option<SimulationRun>,
    timer: Option<SchedulerHandle>,
    state: ControllerState,
    tick_interval: Duration,
}

impl SimulationController {
    /// Create an uninitialized controller with injected collaborators.
    pub fn new(scheduler: Box<dyn Scheduler>, rng: Box<dyn RngCore>) -> Self {
        SimulationController {
            engine: FireSpreadEngine::new(),
            scheduler,
            rng,
            observer: None,
            run: None,
            timer: None,
            state: ControllerState::Uninitialized,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Override the cadence requested from the scheduler
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Attach a renderer to be notified of every cell mutation
    pub fn set_observer(&mut self, observer: Box<dyn RenderObserver>) {
        self.observer = Some(observer);
    }

    /// Current lifecycle state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Whether a run is in progress
    pub fn is_running(&self) -> bool {
        self.state == ControllerState::Running
    }

    /// Whether the current run has started (fire lit)
    pub fn started(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.started)
    }

    /// Ticks completed by the current run, zero when no run exists
    pub fn tick_count(&self) -> u64 {
        self.run.as_ref().map_or(0, |run| run.tick_count)
    }

    /// The current run's grid, where one exists
    pub fn grid(&self) -> Option<&Grid> {
        self.run.as_ref().map(|run| &run.grid)
    }

    fn invalid_state(&self, operation: &'static str) -> SimulationError {
        SimulationError::InvalidState {
            operation,
            state: self.state.name(),
        }
    }

    /// Build a run from the configuration record.
    ///
    /// Valid only while uninitialized. On success the controller holds a
    /// fresh all-alive grid and moves to ready; on error it stays
    /// uninitialized with no grid constructed.
    ///
    /// # Errors
    /// [`SimulationError::Config`] if a required field is missing or out of
    /// range; [`SimulationError::InvalidState`] outside `Uninitialized`.
    pub fn initialize(&mut self, config: &SimulationConfig) -> Result<(), SimulationError> {
        if self.state != ControllerState::Uninitialized {
            return Err(self.invalid_state("initialize"));
        }

        let run_config = config.validate()?;
        info!(
            "initialized {}x{} grid, spread probability {}",
            run_config.rows, run_config.cols, run_config.probability
        );

        self.run = Some(SimulationRun {
            grid: Grid::new(run_config.rows, run_config.cols),
            probability: run_config.probability,
            init_tiles: run_config.init_tiles,
            started: false,
            tick_count: 0,
        });
        self.state = ControllerState::Ready;
        Ok(())
    }

    /// Light the initial fire and register periodic ticking.
    ///
    /// Ignites each configured initial tile, or (0, 0) when none were
    /// configured. Duplicate tiles are ignited once. If any tile is
    /// outside the grid the controller resets itself back to
    /// uninitialized rather than leaving a half-ignited grid.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInitialTile`] for an out-of-bounds tile
    /// (after the automatic reset); [`SimulationError::InvalidState`]
    /// outside `Ready`.
    pub fn begin_run(&mut self) -> Result<(), SimulationError> {
        if self.state != ControllerState::Ready {
            return Err(self.invalid_state("begin run"));
        }
        let state_name = self.state.name();
        let Some(run) = self.run.as_ref() else {
            return Err(SimulationError::InvalidState {
                operation: "begin run",
                state: state_name,
            });
        };

        // Validate every tile before touching the grid.
        let tiles: Vec<(usize, usize)> = if run.init_tiles.is_empty() {
            vec![(0, 0)]
        } else {
            run.init_tiles.clone()
        };
        let invalid = tiles.iter().copied().find(|&(row, col)| !run.grid.contains(row, col));
        if let Some((row, col)) = invalid {
            warn!("initial tile ({}, {}) is outside the grid; resetting", row, col);
            self.reset();
            return Err(SimulationError::InvalidInitialTile { row, col });
        }

        let mut ignited = Vec::new();
        if let Some(run) = self.run.as_mut() {
            for (row, col) in tiles {
                let cell = run
                    .grid
                    .cell_at_mut(row, col)
                    .map_err(|_| SimulationError::InvalidInitialTile { row, col })?;
                // Duplicate tiles arrive already burning; forced ignition
                // is idempotent.
                if cell.is_alive() {
                    cell.ignite()?;
                    ignited.push((row, col));
                }
            }
            run.started = true;
        }

        let handle = self.scheduler.schedule(self.tick_interval);
        self.timer = Some(handle);
        self.state = ControllerState::Running;
        info!(
            "run started with {} initial ignition(s), tick interval {:?}",
            ignited.len(),
            self.tick_interval
        );

        if let Some(observer) = self.observer.as_deref_mut() {
            for &(row, col) in &ignited {
                observer.cell_changed(row, col, CellStatus::Burning);
            }
        }
        Ok(())
    }

    /// Advance the run by one step.
    ///
    /// Delegates to the engine, bumps the tick count, and forwards every
    /// mutation to the attached observer. Safe to call repeatedly on a
    /// fixed external cadence; once the fire has gone out each call is a
    /// no-op that reports no changes.
    ///
    /// # Errors
    /// [`SimulationError::InvalidState`] outside `Running`.
    pub fn tick(&mut self) -> Result<StepReport, SimulationError> {
        if self.state != ControllerState::Running {
            return Err(self.invalid_state("tick"));
        }
        let state_name = self.state.name();
        let Some(run) = self.run.as_mut() else {
            return Err(SimulationError::InvalidState {
                operation: "tick",
                state: state_name,
            });
        };

        let report = self.engine.step(&mut run.grid, run.probability, &mut *self.rng);
        run.tick_count += 1;
        let tick_count = run.tick_count;

        if let Some(observer) = self.observer.as_deref_mut() {
            for change in report.changes() {
                observer.cell_changed(change.row, change.col, change.status);
            }
        }
        debug!("tick {} complete, {} change(s)", tick_count, report.changes().len());
        Ok(report)
    }

    /// Stop periodic ticking without discarding the grid.
    ///
    /// The final state stays available through [`Self::grid`] for
    /// inspection. Cancellation is synchronous; no tick fires after this
    /// returns.
    ///
    /// # Errors
    /// [`SimulationError::InvalidState`] outside `Running`.
    pub fn stop(&mut self) -> Result<(), SimulationError> {
        if self.state != ControllerState::Running {
            return Err(self.invalid_state("stop"));
        }
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        self.state = ControllerState::Stopped;
        info!("simulation stopped after {} tick(s)", self.tick_count());
        Ok(())
    }

    /// Discard the current run and return to uninitialized.
    ///
    /// Cancels any live scheduling registration first. Callable from any
    /// state; a fresh configuration is expected before the next run.
    pub fn reset(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        self.run = None;
        self.state = ControllerState::Uninitialized;
        info!("simulation reset, awaiting fresh configuration");
    }
}
