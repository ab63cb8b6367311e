mod render;

use clap::Parser;
use heatgrid_core::{
    AmbientConditions, Coord, EditAction, Extent, Simulation, SimulationConfig, SimulationError,
    Tool,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Heat diffusion demo on a single furnished room
#[derive(Parser, Debug)]
#[command(name = "heatgrid-demo")]
#[command(about = "Headless thermal diffusion demo", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Number of layers; omit for a planar grid
    #[arg(long)]
    layers: Option<usize>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 200)]
    ticks: u64,

    /// External temperature in °C
    #[arg(short, long, default_value_t = 10.0)]
    external: f64,

    /// Radiator temperature in °C
    #[arg(short, long, default_value_t = 40.0)]
    radiator: f64,

    /// Starting temperature of every cell in °C
    #[arg(long, default_value_t = 20.0)]
    initial: f64,

    /// Wall material (brick, timber, concrete or a custom name)
    #[arg(short, long, default_value = "brick")]
    material: String,

    /// Print statistics every N ticks
    #[arg(long, default_value_t = 50)]
    report_interval: u64,

    /// Toggle all radiators before this tick
    #[arg(long)]
    toggle_at: Option<u64>,

    /// Layer to draw for volumetric grids (defaults to the middle one)
    #[arg(long)]
    layer: Option<usize>,
}

impl Args {
    fn extent(&self) -> Extent {
        match self.layers {
            Some(layers) => Extent::volumetric(self.cols, self.rows, layers),
            None => Extent::planar(self.cols, self.rows),
        }
    }
}

/// Queue a walled room with a window, a door and a central radiator
fn furnish(sim: &mut Simulation, extent: Extent, material: &str) {
    let (cols, rows) = (extent.cols, extent.rows);

    for z in 0..extent.layers {
        for x in 0..cols {
            sim.submit(EditAction::wall(Coord::xyz(x, 0, z), material));
            sim.submit(EditAction::wall(Coord::xyz(x, rows - 1, z), material));
        }
        for y in 1..rows.saturating_sub(1) {
            sim.submit(EditAction::wall(Coord::xyz(0, y, z), material));
            sim.submit(EditAction::wall(Coord::xyz(cols - 1, y, z), material));
        }
        sim.submit(EditAction::place(Coord::xyz(cols / 2, 0, z), Tool::Window));
        sim.submit(EditAction::place(
            Coord::xyz(cols - 1, rows / 2, z),
            Tool::Curtain,
        ));
    }

    sim.submit(EditAction::place(Coord::xyz(0, rows / 2, 0), Tool::Door));
    sim.submit(EditAction::place(
        Coord::xyz(cols / 2, rows / 2, extent.layers / 2),
        Tool::Radiator,
    ));
}

fn main() -> Result<(), SimulationError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let extent = args.extent();

    println!("=== Heat Grid Demo ===\n");

    let mut sim = Simulation::new(SimulationConfig {
        extent,
        initial_temperature: args.initial,
        ambient: AmbientConditions::new(args.external, args.radiator),
        ..Default::default()
    })?;

    if sim.materials().lookup(&args.material).is_none() {
        println!(
            "Unknown material '{}', walls use the default resistance (known: {})",
            args.material,
            sim.materials().names().join(", ")
        );
    }

    furnish(&mut sim, extent, &args.material);
    info!("Room queued: {} edits", sim.queue().pending().len());

    let interval = args.report_interval.max(1);
    for t in 1..=args.ticks {
        if args.toggle_at == Some(t) {
            println!("Tick {t}: toggling radiators");
            sim.submit(EditAction::ToggleRadiators);
        }

        let report = sim.tick();
        if report.rejected > 0 {
            println!(
                "Tick {t}: {} edits outside the grid were skipped",
                report.rejected
            );
        }

        if t % interval == 0 || t == args.ticks {
            let stats = sim.stats();
            println!(
                "Tick {:>5}: min {:6.2}°C  mean {:6.2}°C  max {:6.2}°C  \
                 radiators {}/{}  ({:.3} ms)",
                t,
                stats.min_temperature,
                stats.mean_temperature,
                stats.max_temperature,
                stats.active_radiators,
                stats.radiators,
                sim.last_tick_ms()
            );
        }
    }

    let layer = args
        .layer
        .unwrap_or(extent.layers / 2)
        .min(extent.layers - 1);

    println!("\nLayout (layer {layer}):");
    print!("{}", render::layout(sim.grid(), layer));
    println!("\nHeat map (layer {layer}, 0-40°C):");
    print!("{}", render::heat_map(sim.grid(), layer));

    Ok(())
}
