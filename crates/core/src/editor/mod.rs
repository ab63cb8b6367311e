//! Grid editing tools
//!
//! Every tool rewrites one cell's kind, resistance and radiator switch in
//! place and keeps its temperature. The radiator tool is the exception: it
//! starts the new radiator at the current radiator temperature.
//!
//! | tool     | kind     | resistance          | active |
//! |----------|----------|---------------------|--------|
//! | erase    | empty    | 1.0                 | false  |
//! | wall     | wall     | material table      | false  |
//! | window   | window   | 0.3                 | false  |
//! | door     | door     | 0.8                 | false  |
//! | radiator | radiator | 1.0                 | true   |
//! | curtain  | curtain  | 2.0                 | false  |

mod tool;

pub use tool::Tool;

use crate::core_types::{AmbientConditions, Cell, CellKind, Resistance};
use crate::error::GridError;
use crate::grid::{CellGrid, Coord};
use crate::material::{MaterialTable, DEFAULT_RESISTANCE};
use tracing::{debug, warn};

/// Outcome of one successful edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditReport {
    /// Cell before the edit
    pub previous: Cell,
    /// Cell after the edit
    pub current: Cell,
    /// Wall material was missing or unknown and the default resistance was used
    pub material_fallback: bool,
}

/// Applies tools to single cells using a material palette
#[derive(Debug, Clone, Copy)]
pub struct GridEditor<'a> {
    materials: &'a MaterialTable,
}

impl<'a> GridEditor<'a> {
    pub fn new(materials: &'a MaterialTable) -> Self {
        Self { materials }
    }

    /// Apply `tool` to the cell at `coord`.
    ///
    /// `material` is only read by [`Tool::Wall`]. A missing or unknown
    /// material gives the default resistance and sets
    /// [`EditReport::material_fallback`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] outside the grid; nothing is
    /// changed in that case.
    pub fn apply(
        &self,
        grid: &mut CellGrid,
        coord: Coord,
        tool: Tool,
        material: Option<&str>,
        ambient: &AmbientConditions,
    ) -> Result<EditReport, GridError> {
        let previous = grid.get(coord)?;

        let (resistance, material_fallback) = match tool {
            Tool::Erase | Tool::Radiator => (Resistance::UNIT, false),
            Tool::Window => (Resistance::WINDOW, false),
            Tool::Door => (Resistance::DOOR, false),
            Tool::Curtain => (Resistance::CURTAIN, false),
            Tool::Wall => self.wall_resistance(material),
        };

        let current = Cell {
            kind: tool.kind(),
            resistance,
            temperature: if tool == Tool::Radiator {
                ambient.radiator_temperature
            } else {
                previous.temperature
            },
            active: tool == Tool::Radiator,
        };

        grid.set(coord, current)?;
        debug!("Applied {} at {} ({})", tool, coord, resistance);

        Ok(EditReport {
            previous,
            current,
            material_fallback,
        })
    }

    fn wall_resistance(&self, material: Option<&str>) -> (Resistance, bool) {
        match material {
            Some(name) => match self.materials.lookup(name) {
                Some(resistance) => (resistance, false),
                None => (self.materials.resistance_of(name), true),
            },
            None => {
                warn!(
                    "Wall placed without a material, using default {}",
                    DEFAULT_RESISTANCE
                );
                (DEFAULT_RESISTANCE, true)
            }
        }
    }
}

/// Flip the switch of every radiator; returns how many were toggled
pub fn toggle_all_radiators(grid: &mut CellGrid) -> usize {
    let mut toggled = 0;
    for props in grid.properties_mut() {
        if props.kind == CellKind::Radiator {
            props.active = !props.active;
            toggled += 1;
        }
    }
    debug!("Toggled {} radiators", toggled);
    toggled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Extent;

    fn setup() -> (CellGrid, MaterialTable, AmbientConditions) {
        let grid = CellGrid::new(Extent::planar(4, 4), 20.0).unwrap();
        (grid, MaterialTable::default(), AmbientConditions::new(5.0, 55.0))
    }

    #[test]
    fn test_tool_table() {
        let (mut grid, materials, ambient) = setup();
        let editor = GridEditor::new(&materials);
        let at = Coord::xy(1, 1);

        let cases = [
            (Tool::Window, CellKind::Window, 0.3),
            (Tool::Door, CellKind::Door, 0.8),
            (Tool::Curtain, CellKind::Curtain, 2.0),
            (Tool::Erase, CellKind::Empty, 1.0),
        ];
        for (tool, kind, resistance) in cases {
            let report = editor.apply(&mut grid, at, tool, None, &ambient).unwrap();
            assert_eq!(report.current.kind, kind);
            assert_eq!(*report.current.resistance, resistance);
            assert!(!report.current.active);
            assert_eq!(report.current.temperature, 20.0);
            assert!(!report.material_fallback);
            assert_eq!(grid.get(at).unwrap(), report.current);
        }
    }

    #[test]
    fn test_wall_uses_material_table() {
        let (mut grid, materials, ambient) = setup();
        let editor = GridEditor::new(&materials);

        let brick = editor
            .apply(&mut grid, Coord::xy(0, 0), Tool::Wall, Some("brick"), &ambient)
            .unwrap();
        assert_eq!(*brick.current.resistance, 1.5);
        assert!(!brick.material_fallback);

        let unknown = editor
            .apply(&mut grid, Coord::xy(1, 0), Tool::Wall, Some("marble"), &ambient)
            .unwrap();
        assert_eq!(*unknown.current.resistance, 1.0);
        assert!(unknown.material_fallback);

        let missing = editor
            .apply(&mut grid, Coord::xy(2, 0), Tool::Wall, None, &ambient)
            .unwrap();
        assert_eq!(missing.current.resistance, DEFAULT_RESISTANCE);
        assert!(missing.material_fallback);
    }

    #[test]
    fn test_radiator_starts_at_radiator_temperature() {
        let (mut grid, materials, ambient) = setup();
        let editor = GridEditor::new(&materials);

        let report = editor
            .apply(&mut grid, Coord::xy(2, 2), Tool::Radiator, None, &ambient)
            .unwrap();
        assert_eq!(report.previous.temperature, 20.0);
        assert_eq!(report.current.temperature, 55.0);
        assert!(report.current.active);
        assert_eq!(report.current.resistance, Resistance::UNIT);
    }

    #[test]
    fn test_out_of_range_declines() {
        let (mut grid, materials, ambient) = setup();
        let editor = GridEditor::new(&materials);
        let before = grid.clone();

        let err = editor
            .apply(&mut grid, Coord::xy(4, 0), Tool::Radiator, None, &ambient)
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfRange { .. }));
        assert_eq!(grid.temperatures(), before.temperatures());
        assert!(grid.cells().all(|(_, c)| c.kind == CellKind::Empty));
    }

    #[test]
    fn test_toggle_only_touches_radiators() {
        let (mut grid, materials, ambient) = setup();
        let editor = GridEditor::new(&materials);
        editor
            .apply(&mut grid, Coord::xy(0, 0), Tool::Radiator, None, &ambient)
            .unwrap();
        editor
            .apply(&mut grid, Coord::xy(3, 3), Tool::Radiator, None, &ambient)
            .unwrap();
        editor
            .apply(&mut grid, Coord::xy(1, 0), Tool::Wall, Some("timber"), &ambient)
            .unwrap();
        let wall_before = grid.get(Coord::xy(1, 0)).unwrap();

        assert_eq!(toggle_all_radiators(&mut grid), 2);
        assert!(!grid.get(Coord::xy(0, 0)).unwrap().active);
        assert!(!grid.get(Coord::xy(3, 3)).unwrap().active);
        assert_eq!(grid.get(Coord::xy(1, 0)).unwrap(), wall_before);

        // Temperatures untouched by the toggle
        assert_eq!(grid.temperature_at(Coord::xy(0, 0)).unwrap(), 55.0);

        assert_eq!(toggle_all_radiators(&mut grid), 2);
        assert!(grid.get(Coord::xy(0, 0)).unwrap().active);
    }
}
