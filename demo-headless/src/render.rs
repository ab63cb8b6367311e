//! Text rendering of a grid slice

use heatgrid_core::{CellGrid, CellKind, Coord};

/// Coolest to warmest
const RAMP: &[u8] = b" .:-=+*#%@";

/// Display range in °C; temperatures outside are clamped
const DISPLAY_MIN: f64 = 0.0;
const DISPLAY_MAX: f64 = 40.0;

/// Position of `temperature` in the display range, clamped to `[0, 1]`
pub fn heat_ratio(temperature: f64) -> f64 {
    ((temperature - DISPLAY_MIN) / (DISPLAY_MAX - DISPLAY_MIN)).clamp(0.0, 1.0)
}

fn heat_glyph(temperature: f64) -> char {
    let i = (heat_ratio(temperature) * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[i] as char
}

fn kind_glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Empty => '.',
        CellKind::Wall => '#',
        CellKind::Window => 'W',
        CellKind::Door => 'D',
        CellKind::Radiator => 'R',
        CellKind::Curtain => 'C',
    }
}

/// Heat map of layer `z`, one character per cell
pub fn heat_map(grid: &CellGrid, z: usize) -> String {
    render_layer(grid, z, |grid, coord| {
        grid.temperature_at(coord).map_or('?', heat_glyph)
    })
}

/// Cell kinds of layer `z`, one character per cell
pub fn layout(grid: &CellGrid, z: usize) -> String {
    render_layer(grid, z, |grid, coord| {
        grid.get(coord).map_or('?', |cell| kind_glyph(cell.kind))
    })
}

fn render_layer(grid: &CellGrid, z: usize, glyph: impl Fn(&CellGrid, Coord) -> char) -> String {
    let extent = grid.dimensions();
    let mut out = String::with_capacity((extent.cols + 1) * extent.rows);
    for y in 0..extent.rows {
        for x in 0..extent.cols {
            out.push(glyph(grid, Coord::xyz(x, y, z)));
        }
        out.push('\n');
    }
    out
}
