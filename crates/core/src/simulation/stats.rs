//! Grid summary statistics for drivers and renderers

use crate::core_types::CellKind;
use crate::grid::CellGrid;
use serde::Serialize;

/// Temperature range and radiator counts of a grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridStats {
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub mean_temperature: f64,
    pub radiators: usize,
    pub active_radiators: usize,
}

impl GridStats {
    pub fn from_grid(grid: &CellGrid) -> Self {
        let temps = grid.temperatures();
        let (min, max, sum) = temps.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &t| (min.min(t), max.max(t), sum + t),
        );

        let mut radiators = 0;
        let mut active_radiators = 0;
        for props in grid.properties() {
            if props.kind == CellKind::Radiator {
                radiators += 1;
                if props.active {
                    active_radiators += 1;
                }
            }
        }

        Self {
            min_temperature: min,
            max_temperature: max,
            mean_temperature: sum / temps.len() as f64,
            radiators,
            active_radiators,
        }
    }
}
