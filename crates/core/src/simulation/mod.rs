//! Headless simulation driver
//!
//! [`Simulation`] plays the role of the outer driver loop: edits submitted
//! between ticks are queued, and each [`Simulation::tick`] applies them in
//! order before advancing the temperature field by one step. Nothing runs
//! concurrently with a tick, so readers always see a complete field.

mod config;
mod edit_queue;
mod profiler;
mod stats;

pub use config::SimulationConfig;
pub use edit_queue::{EditAction, EditQueue};
pub use profiler::{FrameTimer, ProfilerScope};
pub use stats::GridStats;

use crate::core_types::AmbientConditions;
use crate::editor::{toggle_all_radiators, GridEditor};
use crate::error::{ConfigError, GridError, SimulationError};
use crate::grid::{CellGrid, Extent};
use crate::material::MaterialTable;
use crate::solver::DiffusionStepper;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Tick number after this tick completed
    pub tick: u64,
    /// Edits applied before stepping
    pub applied: usize,
    /// Edits declined because their coordinate was outside the grid
    pub rejected: usize,
}

/// Grid, stepper, materials and edit queue driven together tick by tick
pub struct Simulation {
    config: SimulationConfig,
    grid: CellGrid,
    stepper: DiffusionStepper,
    queue: EditQueue,
    ambient: AmbientConditions,
    tick: u64,
    /// Set once the current layout has been checked for stability
    stability_checked: bool,
    timer: FrameTimer,
}

impl Simulation {
    /// Build a simulation from a validated config
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting in `config`.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let grid = CellGrid::new(config.extent, config.initial_temperature)?;
        let stepper = DiffusionStepper::new(config.diffusion)?;

        info!(
            "Simulation initialized: {} grid, dt={}, {} materials",
            config.extent,
            config.diffusion.dt,
            config.materials.len()
        );

        Ok(Self {
            grid,
            stepper,
            queue: EditQueue::new(config.history_limit),
            ambient: config.ambient,
            tick: 0,
            stability_checked: false,
            timer: FrameTimer::new(),
            config,
        })
    }

    /// Queue an edit for the next tick
    pub fn submit(&mut self, action: EditAction) {
        self.queue.submit(action);
    }

    /// Apply pending edits, then advance the field by one step
    pub fn tick(&mut self) -> TickReport {
        let scope = ProfilerScope::new("tick");
        self.queue.begin_tick();

        let (applied, rejected) = self.apply_pending();

        if !self.stability_checked {
            self.check_stability();
            self.stability_checked = true;
        }

        self.stepper.step(&mut self.grid, &self.ambient);
        self.tick += 1;
        self.timer.record(scope.elapsed_ms());

        debug!(
            "Tick {}: {} edits applied, {} rejected",
            self.tick, applied, rejected
        );

        TickReport {
            tick: self.tick,
            applied,
            rejected,
        }
    }

    /// Run `ticks` ticks; returns the report of the last one
    pub fn run(&mut self, ticks: u64) -> TickReport {
        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };
        for _ in 0..ticks {
            report = self.tick();
        }
        report
    }

    /// Warn when the explicit step can overshoot on the current layout
    fn check_stability(&self) {
        let number = self.stepper.stability_number(&self.grid);
        if number >= 1.0 {
            warn!(
                "Explicit step may be unstable: stability number {:.3} >= 1 \
                 (dt={}, max stable dt={:.4})",
                number,
                self.stepper.config().dt,
                self.stepper.config().dt / number
            );
        }
    }

    fn apply_pending(&mut self) -> (usize, usize) {
        let mut applied = 0;
        let mut rejected = 0;

        for action in self.queue.take_pending() {
            match &action {
                EditAction::Place {
                    coord,
                    tool,
                    material,
                } => {
                    let editor = GridEditor::new(&self.config.materials);
                    if let Err(e) = editor.apply(
                        &mut self.grid,
                        *coord,
                        *tool,
                        material.as_deref(),
                        &self.ambient,
                    ) {
                        warn!("Edit declined: {}", e);
                        rejected += 1;
                        continue;
                    }
                }
                EditAction::ToggleRadiators => {
                    toggle_all_radiators(&mut self.grid);
                }
            }

            // Layout changed, stability has to be re-checked
            self.stability_checked = false;
            self.queue.mark_applied(action);
            applied += 1;
        }

        (applied, rejected)
    }

    /// Change the ambient temperatures used from the next tick on
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFiniteTemperature`] and keeps the old values
    /// if either temperature is NaN or infinite.
    pub fn set_ambient(&mut self, ambient: AmbientConditions) -> Result<(), ConfigError> {
        ambient.validate()?;
        self.ambient = ambient;
        Ok(())
    }

    /// Discard the grid and every pending edit and start over with `extent`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] and keeps the current grid
    /// if `extent` has a zero-length axis.
    pub fn rebuild(&mut self, extent: Extent) -> Result<(), GridError> {
        let grid = CellGrid::new(extent, self.config.initial_temperature)?;
        info!("Rebuilding grid: {} -> {}", self.grid.dimensions(), extent);

        self.grid = grid;
        self.config.extent = extent;
        self.queue.clear();
        self.stability_checked = false;
        Ok(())
    }

    /// Temperature range and radiator counts of the current grid
    pub fn stats(&self) -> GridStats {
        GridStats::from_grid(&self.grid)
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn ambient(&self) -> AmbientConditions {
        self.ambient
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.config.materials
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn queue(&self) -> &EditQueue {
        &self.queue
    }

    /// Ticks completed since construction (not reset by rebuild)
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Wall-clock duration of the last tick in milliseconds
    pub fn last_tick_ms(&self) -> f64 {
        self.timer.last_frame_time_ms()
    }
}
