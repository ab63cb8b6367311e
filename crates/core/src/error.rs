//! Error types for grid access, cell construction and configuration
//!
//! Every failure in this crate is synchronous and local to the call that caused
//! it. Stepping never fails; only construction, lookup and configuration do.

use crate::grid::{Coord, Extent};
use thiserror::Error;

/// Rejected thermal resistance at cell or material construction time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResistanceError {
    /// Resistance was zero, negative, NaN or infinite
    #[error("thermal resistance must be finite and positive, got {0}")]
    InvalidResistance(f64),
}

/// Errors raised by lattice construction and accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate falls outside `[0, dimension)` on at least one axis
    #[error("coordinate {coord} is outside grid extent {extent}")]
    OutOfRange {
        /// Offending coordinate
        coord: Coord,
        /// Extent of the grid that was addressed
        extent: Extent,
    },
    /// An axis has zero length, or a lower-dimensional extent has extra depth
    #[error("invalid grid dimensions {0}: every axis must be at least 1 cell")]
    InvalidDimensions(Extent),
}

/// Errors raised while validating simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Integration time step is not a finite positive number
    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),
    /// A temperature parameter is NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFiniteTemperature {
        /// Parameter name as it appears in the config
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}

/// Tool name that does not match any known tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolParseError {
    #[error("unknown tool '{0}' (expected erase, wall, window, door, radiator or curtain)")]
    UnknownTool(String),
}

/// Errors surfaced by the headless [`crate::Simulation`] driver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
