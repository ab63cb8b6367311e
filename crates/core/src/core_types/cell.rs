//! Lattice cell model
//!
//! A cell is a role ([`CellKind`]), a thermal resistance, a temperature and a
//! radiator switch. Storage splits the temperature off from the rest
//! ([`CellProperties`]) so the solver can swap whole temperature fields.

use super::units::Resistance;
use crate::error::ResistanceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a cell in the floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Open air inside the plan
    #[default]
    Empty,
    /// Solid wall of some material
    Wall,
    /// Glazing
    Window,
    /// Door leaf
    Door,
    /// Heat source, pinned to the radiator temperature while active
    Radiator,
    /// Curtain layer (volumetric plans)
    Curtain,
}

impl CellKind {
    /// Every kind, in declaration order
    pub const ALL: [CellKind; 6] = [
        CellKind::Empty,
        CellKind::Wall,
        CellKind::Window,
        CellKind::Door,
        CellKind::Radiator,
        CellKind::Curtain,
    ];

    /// Lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            CellKind::Empty => "empty",
            CellKind::Wall => "wall",
            CellKind::Window => "window",
            CellKind::Door => "door",
            CellKind::Radiator => "radiator",
            CellKind::Curtain => "curtain",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything about a cell except its temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellProperties {
    pub kind: CellKind,
    pub resistance: Resistance,
    /// Radiator switch; ignored for every other kind
    pub active: bool,
}

impl CellProperties {
    /// Whether the stepper pins this cell instead of diffusing into it
    #[inline]
    pub const fn is_forced(&self) -> bool {
        matches!(self.kind, CellKind::Radiator) && self.active
    }
}

/// One lattice unit as seen by callers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub resistance: Resistance,
    /// Degrees Celsius, unconstrained
    pub temperature: f64,
    pub active: bool,
}

impl Cell {
    /// Fresh empty cell at the given temperature
    #[must_use]
    pub const fn empty(temperature: f64) -> Self {
        Self {
            kind: CellKind::Empty,
            resistance: Resistance::UNIT,
            temperature,
            active: false,
        }
    }

    /// Build a cell from a raw resistance value.
    ///
    /// # Errors
    ///
    /// Returns [`ResistanceError::InvalidResistance`] if `resistance <= 0`
    /// or is not finite.
    pub fn new(
        kind: CellKind,
        resistance: f64,
        temperature: f64,
        active: bool,
    ) -> Result<Self, ResistanceError> {
        Ok(Self {
            kind,
            resistance: Resistance::new(resistance)?,
            temperature,
            active,
        })
    }

    /// Reassemble a cell from split storage
    #[inline]
    #[must_use]
    pub const fn from_parts(properties: CellProperties, temperature: f64) -> Self {
        Self {
            kind: properties.kind,
            resistance: properties.resistance,
            temperature,
            active: properties.active,
        }
    }

    /// Non-temperature half of the cell
    #[inline]
    #[must_use]
    pub const fn properties(&self) -> CellProperties {
        CellProperties {
            kind: self.kind,
            resistance: self.resistance,
            active: self.active,
        }
    }

    #[inline]
    pub const fn is_forced(&self) -> bool {
        self.properties().is_forced()
    }
}
