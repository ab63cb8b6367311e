//! Behavioural tests for the diffusion stepper and the edit tools
//!
//! The randomized test compares the parallel kernel against a plain
//! sequential evaluation of the update rule built only from the public
//! accessors.

use approx::assert_relative_eq;
use heatgrid_core::{
    step, toggle_all_radiators, AmbientConditions, Cell, CellGrid, CellKind, Coord,
    DiffusionStepper, Extent, GridEditor, GridError, MaterialTable, Tool,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const DT: f64 = 0.05;

fn mean(grid: &CellGrid) -> f64 {
    grid.temperatures().iter().sum::<f64>() / grid.len() as f64
}

/// One explicit step evaluated cell by cell through the public API
fn reference_step(grid: &CellGrid, ambient: &AmbientConditions) -> Vec<f64> {
    let neighbor_count = grid.dimensions().dimensionality.neighbor_count();

    grid.cells()
        .map(|(coord, cell)| {
            if cell.is_forced() {
                return ambient.radiator_temperature;
            }
            let r = cell.resistance.get();
            let neighbors = grid.neighbors(coord).unwrap();

            let mut sum = 0.0;
            for nb in &neighbors {
                let other = grid.get(*nb).unwrap();
                let avg = (r + other.resistance.get()) / 2.0;
                sum += (other.temperature - cell.temperature) / avg;
            }
            let boundary_faces = (neighbor_count - neighbors.len()) as f64;
            let exterior = (ambient.external_temperature - cell.temperature) / ((r + 1.0) / 2.0);
            sum += boundary_faces * exterior;

            cell.temperature + DT * sum
        })
        .collect()
}

fn random_grid(rng: &mut StdRng, extent: Extent) -> CellGrid {
    let mut grid = CellGrid::new(extent, 0.0).unwrap();
    let coords: Vec<Coord> = grid.cells().map(|(coord, _)| coord).collect();

    for coord in coords {
        let kind = CellKind::ALL[rng.random_range(0..CellKind::ALL.len())];
        let cell = Cell::new(
            kind,
            rng.random_range(0.5..2.5),
            rng.random_range(0.0..40.0),
            rng.random_bool(0.5),
        )
        .unwrap();
        grid.set(coord, cell).unwrap();
    }
    grid
}

#[test]
fn uniform_field_at_external_temperature_is_stationary() {
    let ambient = AmbientConditions::new(15.0, 40.0);

    for extent in [
        Extent::linear(5),
        Extent::planar(6, 4),
        Extent::volumetric(3, 4, 2),
    ] {
        let mut grid = CellGrid::new(extent, 15.0).unwrap();
        let mut stepper = DiffusionStepper::default();
        for _ in 0..10 {
            stepper.step(&mut grid, &ambient);
        }
        for &t in grid.temperatures() {
            assert_relative_eq!(t, 15.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn colder_exterior_drains_heat_monotonically() {
    let mut grid = CellGrid::new(Extent::planar(10, 8), 20.0).unwrap();
    let ambient = AmbientConditions::new(10.0, 40.0);
    let mut stepper = DiffusionStepper::default();

    let mut previous = mean(&grid);
    for _ in 0..50 {
        stepper.step(&mut grid, &ambient);
        let current = mean(&grid);
        assert!(current < previous, "mean rose from {previous} to {current}");
        assert!(grid.temperatures().iter().all(|&t| t >= 10.0));
        previous = current;
    }
}

#[test]
fn active_radiator_is_pinned_every_step() {
    let materials = MaterialTable::default();
    let editor = GridEditor::new(&materials);
    let ambient = AmbientConditions::new(0.0, 55.0);

    let mut grid = CellGrid::new(Extent::planar(5, 5), 20.0).unwrap();
    editor
        .apply(&mut grid, Coord::xy(2, 2), Tool::Radiator, None, &ambient)
        .unwrap();

    let mut stepper = DiffusionStepper::default();
    for _ in 0..20 {
        stepper.step(&mut grid, &ambient);
        assert_eq!(grid.temperature_at(Coord::xy(2, 2)).unwrap(), 55.0);
    }
    // Neighbours warm up towards the radiator
    let near = grid.temperature_at(Coord::xy(2, 1)).unwrap();
    let corner = grid.temperature_at(Coord::xy(0, 0)).unwrap();
    assert!(near > corner);
}

#[test]
fn toggled_off_radiator_cools_like_any_cell() {
    let materials = MaterialTable::default();
    let editor = GridEditor::new(&materials);
    let ambient = AmbientConditions::new(0.0, 40.0);

    let mut grid = CellGrid::new(Extent::planar(3, 3), 0.0).unwrap();
    editor
        .apply(&mut grid, Coord::xy(1, 1), Tool::Radiator, None, &ambient)
        .unwrap();

    assert_eq!(toggle_all_radiators(&mut grid), 1);
    let cell = grid.get(Coord::xy(1, 1)).unwrap();
    assert_eq!(cell.kind, CellKind::Radiator);
    assert!(!cell.active);

    step(&mut grid, &ambient);
    // Four neighbours at 0 with unit resistance: 40 + 0.05 * 4 * (0 - 40)
    assert_relative_eq!(
        grid.temperature_at(Coord::xy(1, 1)).unwrap(),
        32.0,
        epsilon = 1e-12
    );

    toggle_all_radiators(&mut grid);
    step(&mut grid, &ambient);
    assert_eq!(grid.temperature_at(Coord::xy(1, 1)).unwrap(), 40.0);
}

#[test]
fn erase_restores_empty_cell_and_keeps_temperature() {
    let materials = MaterialTable::default();
    let editor = GridEditor::new(&materials);
    let ambient = AmbientConditions::default();
    let mut grid = CellGrid::new(Extent::planar(4, 4), 20.0).unwrap();
    let coord = Coord::xy(3, 1);

    editor
        .apply(&mut grid, coord, Tool::Wall, Some("timber"), &ambient)
        .unwrap();
    grid.fill_temperature(27.5);
    let report = editor
        .apply(&mut grid, coord, Tool::Erase, None, &ambient)
        .unwrap();

    assert_eq!(report.previous.kind, CellKind::Wall);
    assert_eq!(report.current, Cell::empty(27.5));
    assert_eq!(grid.get(coord).unwrap(), Cell::empty(27.5));
}

#[test]
fn wall_materials_and_fallback() {
    let materials = MaterialTable::default();
    let editor = GridEditor::new(&materials);
    let ambient = AmbientConditions::default();
    let mut grid = CellGrid::new(Extent::planar(2, 1), 20.0).unwrap();

    let brick = editor
        .apply(&mut grid, Coord::xy(0, 0), Tool::Wall, Some("brick"), &ambient)
        .unwrap();
    assert_eq!(brick.current.resistance.get(), 1.5);
    assert!(!brick.material_fallback);

    let unknown = editor
        .apply(&mut grid, Coord::xy(1, 0), Tool::Wall, Some("marble"), &ambient)
        .unwrap();
    assert_eq!(unknown.current.resistance.get(), 1.0);
    assert_eq!(unknown.current.kind, CellKind::Wall);
    assert!(unknown.material_fallback);
}

#[test]
fn out_of_range_edit_leaves_grid_untouched() {
    let materials = MaterialTable::default();
    let editor = GridEditor::new(&materials);
    let mut grid = CellGrid::new(Extent::planar(3, 3), 20.0).unwrap();
    let before: Vec<Cell> = grid.cells().map(|(_, cell)| cell).collect();

    let result = editor.apply(
        &mut grid,
        Coord::xy(3, 0),
        Tool::Radiator,
        None,
        &AmbientConditions::default(),
    );

    assert!(matches!(result, Err(GridError::OutOfRange { .. })));
    let after: Vec<Cell> = grid.cells().map(|(_, cell)| cell).collect();
    assert_eq!(before, after);
}

#[test]
fn three_cell_line_single_step() {
    let ambient = AmbientConditions::new(20.0, 40.0);

    let mut line = CellGrid::new(Extent::linear(3), 0.0).unwrap();
    for (x, t) in [40.0, 20.0, 0.0].into_iter().enumerate() {
        line.set(Coord::x(x), Cell::empty(t)).unwrap();
    }
    step(&mut line, &ambient);
    let temps = line.temperatures();
    assert_relative_eq!(temps[0], 38.0, epsilon = 1e-12);
    assert_relative_eq!(temps[1], 20.0, epsilon = 1e-12);
    assert_relative_eq!(temps[2], 2.0, epsilon = 1e-12);

    // On a 3x1 plane the -y and +y faces are exterior as well
    let mut strip = CellGrid::new(Extent::planar(3, 1), 0.0).unwrap();
    for (x, t) in [40.0, 20.0, 0.0].into_iter().enumerate() {
        strip.set(Coord::xy(x, 0), Cell::empty(t)).unwrap();
    }
    step(&mut strip, &ambient);
    let temps = strip.temperatures();
    assert_relative_eq!(temps[0], 36.0, epsilon = 1e-12);
    assert_relative_eq!(temps[1], 20.0, epsilon = 1e-12);
    assert_relative_eq!(temps[2], 4.0, epsilon = 1e-12);
}

#[test]
fn volumetric_cells_exchange_with_six_neighbours() {
    let mut grid = CellGrid::new(Extent::volumetric(3, 3, 3), 20.0).unwrap();
    grid.set(Coord::xyz(1, 1, 1), Cell::empty(50.0)).unwrap();
    assert_eq!(grid.neighbors(Coord::xyz(1, 1, 1)).unwrap().len(), 6);

    step(&mut grid, &AmbientConditions::new(20.0, 40.0));

    // 50 + 0.05 * 6 * (20 - 50)
    assert_relative_eq!(
        grid.temperature_at(Coord::xyz(1, 1, 1)).unwrap(),
        41.0,
        epsilon = 1e-12
    );
    // Each face neighbour gains 0.05 * 30
    for nb in grid.neighbors(Coord::xyz(1, 1, 1)).unwrap() {
        assert_relative_eq!(grid.temperature_at(nb).unwrap(), 21.5, epsilon = 1e-12);
    }
    assert_relative_eq!(
        grid.temperature_at(Coord::xyz(0, 0, 0)).unwrap(),
        20.0,
        epsilon = 1e-12
    );
}

#[test]
fn symmetric_field_stays_symmetric() {
    let materials = MaterialTable::default();
    let editor = GridEditor::new(&materials);
    let ambient = AmbientConditions::new(5.0, 45.0);
    let mut grid = CellGrid::new(Extent::planar(7, 5), 20.0).unwrap();

    editor
        .apply(&mut grid, Coord::xy(3, 2), Tool::Radiator, None, &ambient)
        .unwrap();
    for x in [0, 6] {
        editor
            .apply(&mut grid, Coord::xy(x, 2), Tool::Window, None, &ambient)
            .unwrap();
    }

    let mut stepper = DiffusionStepper::default();
    for _ in 0..25 {
        stepper.step(&mut grid, &ambient);
    }

    for y in 0..5 {
        for x in 0..3 {
            assert_relative_eq!(
                grid.temperature_at(Coord::xy(x, y)).unwrap(),
                grid.temperature_at(Coord::xy(6 - x, y)).unwrap(),
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn default_palette_is_stable_in_two_dimensions() {
    let materials = MaterialTable::default();
    let editor = GridEditor::new(&materials);
    let ambient = AmbientConditions::default();
    let mut grid = CellGrid::new(Extent::planar(4, 4), 20.0).unwrap();

    // Windows have the lowest resistance of every tool
    for y in 0..4 {
        for x in 0..4 {
            editor
                .apply(&mut grid, Coord::xy(x, y), Tool::Window, None, &ambient)
                .unwrap();
        }
    }

    let stepper = DiffusionStepper::default();
    let number = stepper.stability_number(&grid);
    assert!(number < 1.0, "stability number {number}");
    assert!(stepper.max_stable_dt(&grid) > DT);
}

#[test]
fn kernel_matches_sequential_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let ambient = AmbientConditions::new(8.0, 36.0);

    for extent in [
        Extent::linear(17),
        Extent::planar(13, 9),
        Extent::volumetric(6, 5, 4),
    ] {
        let mut grid = random_grid(&mut rng, extent);
        let mut stepper = DiffusionStepper::default();

        for _ in 0..5 {
            let expected = reference_step(&grid, &ambient);
            let before: Vec<Cell> = grid.cells().map(|(_, cell)| cell).collect();

            let (lo, hi) = grid
                .temperatures()
                .iter()
                .chain(&[ambient.external_temperature, ambient.radiator_temperature])
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
                    (lo.min(t), hi.max(t))
                });

            stepper.step(&mut grid, &ambient);

            for (actual, expected) in grid.temperatures().iter().zip(&expected) {
                assert_relative_eq!(*actual, *expected, epsilon = 1e-9);
                assert!(*actual >= lo - 1e-9 && *actual <= hi + 1e-9);
            }

            // Stepping never edits the layout
            for ((_, after), before) in grid.cells().zip(&before) {
                assert_eq!(after.properties(), before.properties());
            }
        }
    }
}
