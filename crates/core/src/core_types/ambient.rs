//! Simulation-wide ambient parameters
//!
//! Re-read on every step; callers may change them freely between ticks.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Temperatures supplied from outside the lattice (°C)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConditions {
    /// Temperature beyond the lattice boundary, used for edge conduction
    pub external_temperature: f64,
    /// Temperature imposed on active radiator cells
    pub radiator_temperature: f64,
}

impl Default for AmbientConditions {
    /// Mild winter day with a hot radiator
    fn default() -> Self {
        Self {
            external_temperature: 10.0,
            radiator_temperature: 40.0,
        }
    }
}

impl AmbientConditions {
    #[must_use]
    pub const fn new(external_temperature: f64, radiator_temperature: f64) -> Self {
        Self {
            external_temperature,
            radiator_temperature,
        }
    }

    /// Reject NaN or infinite temperatures.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFiniteTemperature`] naming the bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.external_temperature.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                name: "external_temperature",
                value: self.external_temperature,
            });
        }
        if !self.radiator_temperature.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                name: "radiator_temperature",
                value: self.radiator_temperature,
            });
        }
        Ok(())
    }
}
