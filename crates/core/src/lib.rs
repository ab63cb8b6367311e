//! Heat Grid Core Library
//!
//! A lattice-based thermal diffusion engine for floor plans and room volumes.
//! Each cell carries a material-dependent thermal resistance and a temperature;
//! every tick heat flows between von Neumann neighbours and across the lattice
//! boundary towards an external ambient temperature, while active radiators
//! pin their cells to a supplied radiator temperature.
//!
//! ## Layout
//!
//! - [`grid`]: lattice extent, coordinates and the [`CellGrid`] store
//! - [`material`]: material name to resistance lookup
//! - [`solver`]: explicit-Euler, Jacobi-style [`DiffusionStepper`]
//! - [`editor`]: tool operations that rewrite single cells
//! - [`simulation`]: a headless driver that queues edits and steps the grid
//!
//! ```rust
//! use heatgrid_core::{AmbientConditions, CellGrid, Coord, DiffusionStepper, Extent};
//!
//! let mut grid = CellGrid::new(Extent::planar(8, 6), 20.0).unwrap();
//! let mut stepper = DiffusionStepper::default();
//! stepper.step(&mut grid, &AmbientConditions::new(5.0, 45.0));
//! assert!(grid.temperature_at(Coord::xy(0, 0)).unwrap() < 20.0);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Lattice, materials and the stepping kernel
pub mod grid;
pub mod material;
pub mod solver;

// Edit tools and the headless driver
pub mod editor;
pub mod simulation;

// Re-export core types
pub use core_types::{AmbientConditions, Cell, CellKind, CellProperties, Resistance};
pub use error::{ConfigError, GridError, ResistanceError, SimulationError, ToolParseError};

// Re-export lattice and solver types
pub use grid::{CellGrid, Coord, Dimensionality, Extent, Offset};
pub use material::MaterialTable;
pub use solver::{step, DiffusionConfig, DiffusionStepper, ScalarField};

// Re-export editing and driver types
pub use editor::{toggle_all_radiators, EditReport, GridEditor, Tool};
pub use simulation::{EditAction, EditQueue, GridStats, Simulation, SimulationConfig, TickReport};
