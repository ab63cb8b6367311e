//! Heat diffusion kernel
//!
//! Explicit-Euler conduction over a lattice with per-cell thermal resistance:
//! ```text
//! T'(c) = T(c) + dt · Σ_n (T(n) − T(c)) / ((R(c) + R(n)) / 2)
//! ```
//! where `n` runs over every face direction (2, 4 or 6). A direction that
//! leaves the lattice stands for the exterior, with the external temperature
//! and the boundary resistance. Active radiators are pinned to the radiator
//! temperature instead.
//!
//! Reads come only from `temp_in` and writes go only to `temp_out`, so the
//! update is Jacobi-style: no cell sees a neighbour's new value within a step.
//!
//! The scheme stays bounded while `dt · max conductance · neighbour count`
//! is below 1; see [`stability_number`].

use crate::core_types::{CellProperties, Resistance};
use crate::grid::{Coord, Extent};
use rayon::prelude::*;

/// Inputs for one diffusion pass
#[derive(Debug, Clone, Copy)]
pub struct DiffusionParams {
    /// Integration step
    pub dt: f64,
    /// Temperature beyond the lattice boundary (°C)
    pub external_temperature: f64,
    /// Temperature forced onto active radiators (°C)
    pub radiator_temperature: f64,
    /// Resistance assigned to the exterior at boundary faces
    pub boundary_resistance: Resistance,
}

/// CPU implementation of one diffusion step
///
/// # Arguments
///
/// * `temp_in` - Previous temperature field (°C)
/// * `temp_out` - Next temperature field, fully overwritten (°C)
/// * `properties` - Cell kinds, resistances and radiator switches
/// * `extent` - Lattice shape; all three slices hold `extent.cell_count()` values
/// * `params` - Step parameters
///
/// Rows (x runs) are processed in parallel. Each output cell depends only on
/// `temp_in`, so results do not depend on scheduling.
pub fn step_diffusion_cpu(
    temp_in: &[f64],
    temp_out: &mut [f64],
    properties: &[CellProperties],
    extent: Extent,
    params: DiffusionParams,
) {
    debug_assert_eq!(temp_in.len(), extent.cell_count());
    debug_assert_eq!(temp_out.len(), extent.cell_count());
    debug_assert_eq!(properties.len(), extent.cell_count());

    let offsets = extent.dimensionality.offsets();

    temp_out
        .par_chunks_mut(extent.cols)
        .enumerate()
        .for_each(|(row, out_row)| {
            let y = row % extent.rows;
            let z = row / extent.rows;

            for (x, cell_temp) in out_row.iter_mut().enumerate() {
                let idx = row * extent.cols + x;
                let cell = properties[idx];

                // Active radiators hold their setpoint and skip conduction
                if cell.is_forced() {
                    *cell_temp = params.radiator_temperature;
                    continue;
                }

                let t = temp_in[idx];
                let here = Coord::xyz(x, y, z);
                let mut sum = 0.0;

                for &offset in offsets {
                    if let Some(neighbor) = extent.step(here, offset) {
                        let nidx = extent.index_unchecked(neighbor);
                        let conductance =
                            cell.resistance.conductance_with(properties[nidx].resistance);
                        sum += (temp_in[nidx] - t) * conductance;
                    } else {
                        let conductance =
                            cell.resistance.conductance_with(params.boundary_resistance);
                        sum += (params.external_temperature - t) * conductance;
                    }
                }

                *cell_temp = t + params.dt * sum;
            }
        });
}

/// Largest face conductance anywhere on the lattice, boundary faces included
pub fn max_conductance(
    properties: &[CellProperties],
    extent: Extent,
    boundary_resistance: Resistance,
) -> f64 {
    let offsets = extent.dimensionality.offsets();

    properties
        .par_iter()
        .enumerate()
        .map(|(idx, cell)| {
            let here = extent.coord_of(idx);
            offsets
                .iter()
                .map(|&offset| {
                    let other = extent.step(here, offset).map_or(boundary_resistance, |n| {
                        properties[extent.index_unchecked(n)].resistance
                    });
                    cell.resistance.conductance_with(other)
                })
                .fold(0.0_f64, f64::max)
        })
        .reduce(|| 0.0, f64::max)
}

/// Explicit-scheme stability figure `dt · max conductance · neighbour count`
///
/// Values at or above 1 let a cell overshoot its neighbours in one step.
pub fn stability_number(
    properties: &[CellProperties],
    extent: Extent,
    dt: f64,
    boundary_resistance: Resistance,
) -> f64 {
    let neighbors = extent.dimensionality.neighbor_count() as f64;
    dt * max_conductance(properties, extent, boundary_resistance) * neighbors
}
