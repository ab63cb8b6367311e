//! Lattice addressing and cell storage

pub mod cell_grid;
pub mod extent;

// Re-export main types
pub use cell_grid::CellGrid;
pub use extent::{Coord, Dimensionality, Extent, Offset};
