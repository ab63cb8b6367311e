//! Scalar field storage
//!
//! Stores one `f64` per lattice cell as a flat `Vec<f64>` in the same order as
//! [`Extent::index_of`]. Used for the live temperature field and the
//! stepper's back buffer.

use crate::grid::Extent;

/// Field data container shaped by an [`Extent`]
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    data: Vec<f64>,
    extent: Extent,
}

impl ScalarField {
    /// Create a new field with given dimensions, initialized to zero
    #[must_use]
    pub fn new(extent: Extent) -> Self {
        Self::with_value(extent, 0.0)
    }

    /// Create a new field with given dimensions, initialized to a value
    #[must_use]
    pub fn with_value(extent: Extent, value: f64) -> Self {
        Self {
            data: vec![value; extent.cell_count()],
            extent,
        }
    }

    /// Zero-cell placeholder, reshaped on first use
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Extent::linear(0))
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get reference to field data
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable reference to field data
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Fill entire field with a value
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Match `extent`, discarding contents if the shape changes
    pub fn reshape(&mut self, extent: Extent) {
        if self.extent != extent {
            self.extent = extent;
            self.data.clear();
            self.data.resize(extent.cell_count(), 0.0);
        }
    }
}
