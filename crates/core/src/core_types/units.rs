//! Semantic unit types for thermal quantities
//!
//! Wraps thermal resistance in a validated newtype so the stepping kernel can
//! divide by it without re-checking every tick.
//!
//! # Design Philosophy
//! - Private inner field with a validated constructor
//! - Total ordering via `Ord` (values are always finite, so `total_cmp` is exact)
//! - Serde support that re-validates on deserialization
//!
//! # Usage
//! ```
//! use heatgrid_core::core_types::units::Resistance;
//!
//! let brick = Resistance::new(1.5).unwrap();
//! assert_eq!(*brick, 1.5);
//! assert!(Resistance::new(0.0).is_err());
//! ```

use crate::error::ResistanceError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Thermal resistance of a cell material (dimensionless, higher insulates more)
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Resistance(f64);

impl Eq for Resistance {}

impl PartialOrd for Resistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Resistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Resistance {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Resistance {
    /// Neutral resistance: empty cells, radiators and the lattice exterior
    pub const UNIT: Resistance = Resistance(1.0);

    /// Glazing
    pub const WINDOW: Resistance = Resistance(0.3);

    /// Interior door leaf
    pub const DOOR: Resistance = Resistance(0.8);

    /// Heavy curtain layer
    pub const CURTAIN: Resistance = Resistance(2.0);

    /// Create a validated resistance.
    ///
    /// # Errors
    ///
    /// Returns [`ResistanceError::InvalidResistance`] for zero, negative,
    /// NaN or infinite values.
    #[inline]
    pub fn new(value: f64) -> Result<Self, ResistanceError> {
        if value.is_finite() && value > 0.0 {
            Ok(Resistance(value))
        } else {
            Err(ResistanceError::InvalidResistance(value))
        }
    }

    /// Wrap a literal known to be finite and positive
    #[inline]
    pub(crate) const fn from_raw(value: f64) -> Self {
        Resistance(value)
    }

    /// Raw value
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Conductance across the shared face of two cells.
    ///
    /// The face resistance is the arithmetic mean of both sides, so the
    /// conductance is `1 / ((a + b) / 2)`.
    #[inline]
    #[must_use]
    pub fn conductance_with(self, other: Resistance) -> f64 {
        1.0 / ((self.0 + other.0) / 2.0)
    }
}

impl TryFrom<f64> for Resistance {
    type Error = ResistanceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Resistance::new(value)
    }
}

impl From<Resistance> for f64 {
    fn from(r: Resistance) -> f64 {
        r.0
    }
}

impl Default for Resistance {
    fn default() -> Self {
        Resistance::UNIT
    }
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R={:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        for bad in [0.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(Resistance::new(bad).is_err(), "{bad} should be rejected");
        }
        assert!(Resistance::new(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_conductance_is_inverse_mean() {
        let brick = Resistance::new(1.5).unwrap();
        assert_eq!(Resistance::UNIT.conductance_with(Resistance::UNIT), 1.0);
        assert!((brick.conductance_with(Resistance::UNIT) - 0.8).abs() < 1e-12);
        assert_eq!(
            brick.conductance_with(Resistance::WINDOW),
            Resistance::WINDOW.conductance_with(brick)
        );
    }

    #[test]
    fn test_ordering() {
        assert!(Resistance::WINDOW < Resistance::DOOR);
        assert!(Resistance::DOOR < Resistance::UNIT);
        assert_eq!(
            Resistance::CURTAIN.max(Resistance::UNIT),
            Resistance::CURTAIN
        );
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Resistance::try_from(2.0).map(Resistance::get), Ok(2.0));
        assert_eq!(
            Resistance::try_from(-1.0),
            Err(ResistanceError::InvalidResistance(-1.0))
        );
    }
}
