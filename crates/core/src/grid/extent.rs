//! Lattice extents, coordinates and von Neumann neighbourhoods
//!
//! Cells are stored in row-major order with x fastest, then y, then z:
//! `index = z * (rows * cols) + y * cols + x`. One [`Dimensionality`]
//! parameter selects the neighbourhood so 1D, 2D and 3D lattices share a
//! single stepping routine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit step towards a face neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: isize,
    pub dy: isize,
    pub dz: isize,
}

impl Offset {
    const fn new(dx: isize, dy: isize, dz: isize) -> Self {
        Self { dx, dy, dz }
    }
}

// Order matters only for floating-point summation order: -x, +x, -y, +y, -z, +z
const LINEAR_OFFSETS: [Offset; 2] = [Offset::new(-1, 0, 0), Offset::new(1, 0, 0)];

const PLANAR_OFFSETS: [Offset; 4] = [
    Offset::new(-1, 0, 0),
    Offset::new(1, 0, 0),
    Offset::new(0, -1, 0),
    Offset::new(0, 1, 0),
];

const VOLUMETRIC_OFFSETS: [Offset; 6] = [
    Offset::new(-1, 0, 0),
    Offset::new(1, 0, 0),
    Offset::new(0, -1, 0),
    Offset::new(0, 1, 0),
    Offset::new(0, 0, -1),
    Offset::new(0, 0, 1),
];

/// Number of lattice axes, which fixes the neighbourhood size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimensionality {
    /// Single row of cells, 2 neighbours
    Linear,
    /// Floor plan, 4 neighbours
    Planar,
    /// Room volume, 6 neighbours
    Volumetric,
}

impl Dimensionality {
    /// Face-neighbour offsets in summation order
    #[inline]
    pub const fn offsets(self) -> &'static [Offset] {
        match self {
            Dimensionality::Linear => &LINEAR_OFFSETS,
            Dimensionality::Planar => &PLANAR_OFFSETS,
            Dimensionality::Volumetric => &VOLUMETRIC_OFFSETS,
        }
    }

    /// Number of face neighbours (in-range or boundary) of every cell
    #[inline]
    pub const fn neighbor_count(self) -> usize {
        self.offsets().len()
    }
}

/// Integer lattice coordinate; unused axes stay at 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn x(x: usize) -> Self {
        Self { x, y: 0, z: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn xy(x: usize, y: usize) -> Self {
        Self { x, y, z: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn xyz(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Fixed lattice dimensions
///
/// Constructors never fail; [`crate::CellGrid::new`] rejects zero-sized or
/// inconsistent extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extent {
    pub cols: usize,
    pub rows: usize,
    pub layers: usize,
    pub dimensionality: Dimensionality,
}

impl Extent {
    /// One row of `cols` cells
    #[must_use]
    pub const fn linear(cols: usize) -> Self {
        Self {
            cols,
            rows: 1,
            layers: 1,
            dimensionality: Dimensionality::Linear,
        }
    }

    /// `cols × rows` floor plan
    #[must_use]
    pub const fn planar(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            layers: 1,
            dimensionality: Dimensionality::Planar,
        }
    }

    /// `cols × rows × layers` volume
    #[must_use]
    pub const fn volumetric(cols: usize, rows: usize, layers: usize) -> Self {
        Self {
            cols,
            rows,
            layers,
            dimensionality: Dimensionality::Volumetric,
        }
    }

    /// Total number of cells
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.cols * self.rows * self.layers
    }

    /// Total number of cells, `None` if it does not fit in `usize`
    pub const fn checked_cell_count(&self) -> Option<usize> {
        match self.cols.checked_mul(self.rows) {
            Some(plane) => plane.checked_mul(self.layers),
            None => None,
        }
    }

    /// Every axis non-empty, unused axes collapsed to 1 and the cell count
    /// addressable
    pub const fn is_valid(&self) -> bool {
        let axes_ok = self.cols > 0 && self.rows > 0 && self.layers > 0;
        let shape_ok = match self.dimensionality {
            Dimensionality::Linear => self.rows == 1 && self.layers == 1,
            Dimensionality::Planar => self.layers == 1,
            Dimensionality::Volumetric => true,
        };
        axes_ok && shape_ok && self.checked_cell_count().is_some()
    }

    #[inline]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.cols && coord.y < self.rows && coord.z < self.layers
    }

    /// Flat storage index, or `None` outside the extent
    #[inline]
    pub const fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(self.index_unchecked(coord))
        } else {
            None
        }
    }

    /// Flat storage index without a bounds check
    #[inline]
    pub const fn index_unchecked(&self, coord: Coord) -> usize {
        coord.z * (self.rows * self.cols) + coord.y * self.cols + coord.x
    }

    /// Coordinate of a flat storage index
    #[inline]
    pub const fn coord_of(&self, index: usize) -> Coord {
        let plane = self.rows * self.cols;
        let z = index / plane;
        let rem = index % plane;
        Coord {
            x: rem % self.cols,
            y: rem / self.cols,
            z,
        }
    }

    /// Move one step; `None` when the step leaves the lattice
    #[inline]
    pub fn step(&self, coord: Coord, offset: Offset) -> Option<Coord> {
        let next = Coord {
            x: coord.x.checked_add_signed(offset.dx)?,
            y: coord.y.checked_add_signed(offset.dy)?,
            z: coord.z.checked_add_signed(offset.dz)?,
        };
        self.contains(next).then_some(next)
    }

    /// In-range face neighbours of `coord`, in summation order
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.dimensionality
            .offsets()
            .iter()
            .filter_map(move |&offset| self.step(coord, offset))
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dimensionality {
            Dimensionality::Linear => write!(f, "{}", self.cols),
            Dimensionality::Planar => write!(f, "{}x{}", self.cols, self.rows),
            Dimensionality::Volumetric => {
                write!(f, "{}x{}x{}", self.cols, self.rows, self.layers)
            }
        }
    }
}
