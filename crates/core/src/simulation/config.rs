//! Simulation configuration
//!
//! Plain data with serde support; every field has a default so partial
//! configs deserialize.

use crate::core_types::AmbientConditions;
use crate::error::{ConfigError, GridError, SimulationError};
use crate::grid::Extent;
use crate::material::MaterialTable;
use crate::solver::DiffusionConfig;
use serde::{Deserialize, Serialize};

/// Everything needed to build a [`super::Simulation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Lattice shape
    pub extent: Extent,
    /// Temperature of every cell after (re)building the grid (°C)
    pub initial_temperature: f64,
    /// Integration settings
    pub diffusion: DiffusionConfig,
    /// Starting ambient temperatures
    pub ambient: AmbientConditions,
    /// Wall material palette
    pub materials: MaterialTable,
    /// How many applied edits to remember
    pub history_limit: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            extent: Extent::planar(20, 15),
            initial_temperature: 20.0,
            diffusion: DiffusionConfig::default(),
            ambient: AmbientConditions::default(),
            materials: MaterialTable::default(),
            history_limit: 10000,
        }
    }
}

impl SimulationConfig {
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.extent.is_valid() {
            return Err(GridError::InvalidDimensions(self.extent).into());
        }
        if !self.initial_temperature.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                name: "initial_temperature",
                value: self.initial_temperature,
            }
            .into());
        }
        self.diffusion.validate()?;
        self.ambient.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Resistance;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_each_bad_field() {
        let bad_extent = SimulationConfig {
            extent: Extent::planar(0, 10),
            ..Default::default()
        };
        assert!(matches!(
            bad_extent.validate(),
            Err(SimulationError::Grid(GridError::InvalidDimensions(_)))
        ));

        let bad_initial = SimulationConfig {
            initial_temperature: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            bad_initial.validate(),
            Err(SimulationError::Config(ConfigError::NonFiniteTemperature { .. }))
        ));

        let bad_dt = SimulationConfig {
            diffusion: DiffusionConfig {
                dt: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            bad_dt.validate(),
            Err(SimulationError::Config(ConfigError::InvalidTimeStep(_)))
        ));

        let bad_ambient = SimulationConfig {
            ambient: AmbientConditions::new(f64::INFINITY, 40.0),
            ..Default::default()
        };
        assert!(bad_ambient.validate().is_err());
    }

    #[test]
    fn test_loads_partial_config_with_mixed_case_materials() {
        let config: SimulationConfig = serde_json::from_str(
            r#"{"extent":{"cols":6,"rows":4,"layers":1,"dimensionality":"planar"},
                "materials":{"entries":{"Timber":2.0,"Straw Bale":4.5}}}"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.extent, Extent::planar(6, 4));
        assert_eq!(config.initial_temperature, 20.0);
        let timber = config.materials.lookup("Timber");
        assert_eq!(timber.map(Resistance::get), Some(2.0));
        let straw = config.materials.lookup("straw bale");
        assert_eq!(straw.map(Resistance::get), Some(4.5));

        let reloaded: SimulationConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(reloaded, config);
    }
}
