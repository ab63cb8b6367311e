//! Wall material palette
//!
//! Maps a material name to the thermal resistance a wall of that material
//! gets. Names are matched case-insensitively. Unknown names fall back to
//! [`DEFAULT_RESISTANCE`]; use [`MaterialTable::lookup`] to detect that.

use crate::core_types::Resistance;
use crate::error::ResistanceError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Resistance used for unrecognised material names
pub const DEFAULT_RESISTANCE: Resistance = Resistance::UNIT;

const BRICK: Resistance = Resistance::from_raw(1.5);
const TIMBER: Resistance = Resistance::from_raw(2.0);
const CONCRETE: Resistance = Resistance::from_raw(1.0);

/// Named wall materials and their resistances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MaterialEntries")]
pub struct MaterialTable {
    entries: FxHashMap<String, Resistance>,
}

/// Serialized form; keys are normalized on the way in
#[derive(Deserialize)]
struct MaterialEntries {
    entries: FxHashMap<String, Resistance>,
}

impl From<MaterialEntries> for MaterialTable {
    fn from(raw: MaterialEntries) -> Self {
        let mut table = Self::empty();
        for (name, resistance) in raw.entries {
            table.insert(&name, resistance);
        }
        table
    }
}

impl Default for MaterialTable {
    /// Brick, timber and concrete
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("brick", BRICK);
        table.insert("timber", TIMBER);
        table.insert("concrete", CONCRETE);
        table
    }
}

impl MaterialTable {
    /// Table with no materials; every lookup falls back
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Builder-style registration from a raw resistance.
    ///
    /// # Errors
    ///
    /// Returns [`ResistanceError::InvalidResistance`] for non-positive or
    /// non-finite values.
    pub fn with_material(mut self, name: &str, resistance: f64) -> Result<Self, ResistanceError> {
        self.insert(name, Resistance::new(resistance)?);
        Ok(self)
    }

    /// Register or replace a material; returns the previous resistance
    pub fn insert(&mut self, name: &str, resistance: Resistance) -> Option<Resistance> {
        self.entries.insert(name.to_ascii_lowercase(), resistance)
    }

    /// Resistance of a known material, `None` if the name is not registered
    pub fn lookup(&self, name: &str) -> Option<Resistance> {
        self.entries.get(&name.to_ascii_lowercase()).copied()
    }

    /// Resistance of `name`, falling back to [`DEFAULT_RESISTANCE`]
    pub fn resistance_of(&self, name: &str) -> Resistance {
        self.lookup(name).unwrap_or_else(|| {
            warn!(
                "Unknown material '{}', using default {}",
                name, DEFAULT_RESISTANCE
            );
            DEFAULT_RESISTANCE
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
