//! Dense cell lattice
//!
//! Stores cell properties and temperatures as separate arrays (struct of
//! arrays). The temperature array is a [`ScalarField`] that the diffusion
//! stepper swaps with its own back buffer once per tick.

use super::extent::{Coord, Extent};
use crate::core_types::{Cell, CellProperties};
use crate::error::GridError;
use crate::solver::ScalarField;
use tracing::debug;

/// Fixed-size lattice of cells
///
/// Every in-range coordinate has exactly one cell. Dimensions never change;
/// resizing means building a new grid and dropping the old state.
#[derive(Debug, Clone)]
pub struct CellGrid {
    extent: Extent,
    properties: Vec<CellProperties>,
    temperature: ScalarField,
}

impl CellGrid {
    /// Build a lattice of empty cells at `initial_temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if any axis is zero, the
    /// extent carries depth its dimensionality cannot use, or the cell count
    /// overflows `usize`.
    pub fn new(extent: Extent, initial_temperature: f64) -> Result<Self, GridError> {
        if !extent.is_valid() {
            return Err(GridError::InvalidDimensions(extent));
        }

        debug!(
            "Building {} grid ({} cells) at {:.1}°C",
            extent,
            extent.cell_count(),
            initial_temperature
        );

        Ok(Self {
            extent,
            properties: vec![CellProperties::default(); extent.cell_count()],
            temperature: ScalarField::with_value(extent, initial_temperature),
        })
    }

    /// Lattice dimensions
    #[inline]
    pub fn dimensions(&self) -> Extent {
        self.extent
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Always `false`: a valid grid has at least one cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn checked_index(&self, coord: Coord) -> Result<usize, GridError> {
        self.extent.index_of(coord).ok_or(GridError::OutOfRange {
            coord,
            extent: self.extent,
        })
    }

    /// Read one cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] outside the extent.
    pub fn get(&self, coord: Coord) -> Result<Cell, GridError> {
        let idx = self.checked_index(coord)?;
        Ok(Cell::from_parts(
            self.properties[idx],
            self.temperature.as_slice()[idx],
        ))
    }

    /// Overwrite one cell, temperature included.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] outside the extent; the grid is
    /// left untouched.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(coord)?;
        self.properties[idx] = cell.properties();
        self.temperature.as_mut_slice()[idx] = cell.temperature;
        Ok(())
    }

    /// Temperature of one cell (°C), for renderers.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] outside the extent.
    pub fn temperature_at(&self, coord: Coord) -> Result<f64, GridError> {
        let idx = self.checked_index(coord)?;
        Ok(self.temperature.as_slice()[idx])
    }

    /// In-range face neighbours of `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if `coord` itself is outside.
    pub fn neighbors(&self, coord: Coord) -> Result<Vec<Coord>, GridError> {
        self.checked_index(coord)?;
        Ok(self.extent.neighbors(coord).collect())
    }

    /// All cells with their coordinates, in storage order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.properties
            .iter()
            .zip(self.temperature.as_slice())
            .enumerate()
            .map(|(idx, (&props, &temp))| {
                (self.extent.coord_of(idx), Cell::from_parts(props, temp))
            })
    }

    /// Temperature field in storage order
    #[inline]
    pub fn temperatures(&self) -> &[f64] {
        self.temperature.as_slice()
    }

    /// Reset every temperature, leaving kinds and resistances alone
    pub fn fill_temperature(&mut self, temperature: f64) {
        self.temperature.fill(temperature);
    }

    #[inline]
    pub(crate) fn properties(&self) -> &[CellProperties] {
        &self.properties
    }

    #[inline]
    pub(crate) fn properties_mut(&mut self) -> &mut [CellProperties] {
        &mut self.properties
    }

    /// Exchange the live temperature field with `back`.
    ///
    /// # Panics
    ///
    /// Panics if `back` was shaped for a different extent.
    pub(crate) fn swap_temperature(&mut self, back: &mut ScalarField) {
        assert_eq!(
            back.extent(),
            self.extent,
            "Back buffer shape does not match grid"
        );
        std::mem::swap(&mut self.temperature, back);
    }
}
