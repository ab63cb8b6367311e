//! Core types and utilities

pub mod ambient;
pub mod cell;
pub mod units;

pub use ambient::AmbientConditions;
pub use cell::{Cell, CellKind, CellProperties};
pub use units::Resistance;
