//! Double-buffered diffusion stepper
//!
//! Owns the back temperature buffer. Each step fills the back buffer from the
//! grid's live field and then swaps the two, so readers only ever see a
//! complete field.

use super::fields::ScalarField;
use super::heat_transfer::{step_diffusion_cpu, stability_number, DiffusionParams};
use crate::core_types::{AmbientConditions, Resistance};
use crate::error::ConfigError;
use crate::grid::CellGrid;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default explicit-Euler time step
pub const DEFAULT_TIME_STEP: f64 = 0.05;

/// Integration settings for the diffusion stepper
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffusionConfig {
    /// Time step per tick
    pub dt: f64,
    /// Resistance of the exterior at boundary faces
    pub boundary_resistance: Resistance,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_TIME_STEP,
            boundary_resistance: Resistance::UNIT,
        }
    }
}

impl DiffusionConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeStep`] unless `dt` is finite and
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dt.is_finite() && self.dt > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidTimeStep(self.dt))
        }
    }
}

/// Advances a [`CellGrid`] one tick at a time
#[derive(Debug, Clone)]
pub struct DiffusionStepper {
    config: DiffusionConfig,
    back: ScalarField,
    steps: u64,
}

impl Default for DiffusionStepper {
    fn default() -> Self {
        Self {
            config: DiffusionConfig::default(),
            back: ScalarField::empty(),
            steps: 0,
        }
    }
}

impl DiffusionStepper {
    /// # Errors
    ///
    /// Returns the validation error of `config`.
    pub fn new(config: DiffusionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    #[inline]
    pub fn config(&self) -> DiffusionConfig {
        self.config
    }

    /// Steps taken since construction
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance the whole temperature field by one tick.
    ///
    /// Only temperatures change; kinds, resistances and radiator switches
    /// are left as they are. Never fails on a valid grid.
    pub fn step(&mut self, grid: &mut CellGrid, ambient: &AmbientConditions) {
        let extent = grid.dimensions();
        // Grid may have been rebuilt with another shape since the last step
        self.back.reshape(extent);

        let params = DiffusionParams {
            dt: self.config.dt,
            external_temperature: ambient.external_temperature,
            radiator_temperature: ambient.radiator_temperature,
            boundary_resistance: self.config.boundary_resistance,
        };

        step_diffusion_cpu(
            grid.temperatures(),
            self.back.as_mut_slice(),
            grid.properties(),
            extent,
            params,
        );

        // Swap buffers
        grid.swap_temperature(&mut self.back);
        self.steps += 1;

        trace!(step = self.steps, %extent, "diffusion step committed");
    }

    /// `dt · max conductance · neighbour count` for the grid's current layout
    pub fn stability_number(&self, grid: &CellGrid) -> f64 {
        stability_number(
            grid.properties(),
            grid.dimensions(),
            self.config.dt,
            self.config.boundary_resistance,
        )
    }

    /// Largest `dt` keeping [`Self::stability_number`] at or below 1
    pub fn max_stable_dt(&self, grid: &CellGrid) -> f64 {
        let number = self.stability_number(grid);
        self.config.dt / number
    }
}

/// One tick with default settings; see [`DiffusionStepper::step`]
pub fn step(grid: &mut CellGrid, ambient: &AmbientConditions) {
    DiffusionStepper::default().step(grid, ambient);
}
