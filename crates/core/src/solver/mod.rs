//! Diffusion solver
//!
//! [`DiffusionStepper`] owns the back buffer and drives the CPU kernel in
//! [`heat_transfer`]. The kernel is generic over lattice dimensionality, so
//! linear, planar and volumetric grids share one code path.

mod fields;
pub mod heat_transfer;
mod stepper;

// Re-exports
pub use fields::ScalarField;
pub use heat_transfer::{max_conductance, stability_number, step_diffusion_cpu, DiffusionParams};
pub use stepper::{step, DiffusionConfig, DiffusionStepper, DEFAULT_TIME_STEP};
