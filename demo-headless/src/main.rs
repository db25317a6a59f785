//! Headless forest-fire demo
//!
//! Drives the simulation controller from a plain loop, standing in for
//! the periodic scheduler a UI embedding would provide, and prints each
//! frame as ASCII. Useful for eyeballing spread behavior and for quick
//! deterministic replays via `--seed`.

use std::error::Error;
use std::thread;
use std::time::Duration;

use clap::Parser;
use forest_fire_core::{
    CellStatus, Grid, ManualScheduler, SimulationConfig, SimulationController,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Forest-fire grid simulation demo
#[derive(Parser, Debug)]
#[command(name = "demo-headless")]
#[command(about = "Forest-fire spread simulation demo", long_about = None)]
struct Args {
    /// Grid row count
    #[arg(short, long, default_value_t = 10)]
    rows: u32,

    /// Grid column count
    #[arg(short, long, default_value_t = 20)]
    cols: u32,

    /// Ignition probability in [0, 1]
    #[arg(short, long, default_value_t = 0.6)]
    probability: f32,

    /// Initial ignition tile as "row,col"; repeatable, defaults to 0,0
    #[arg(short, long = "ignite", value_parser = parse_tile)]
    ignite: Vec<(u32, u32)>,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 150)]
    interval_ms: u64,

    /// Stop after this many ticks even if the fire is still going
    #[arg(long, default_value_t = 1000)]
    max_ticks: u64,

    /// RNG seed for deterministic replay (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn parse_tile(text: &str) -> Result<(u32, u32), String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,col\", got \"{text}\""))?;
    let row = row.trim().parse().map_err(|_| format!("bad row in \"{text}\""))?;
    let col = col.trim().parse().map_err(|_| format!("bad col in \"{text}\""))?;
    Ok((row, col))
}

fn render(grid: &Grid) {
    let mut frame = String::with_capacity((grid.cols() + 1) * grid.rows());
    for cell in grid.iter() {
        frame.push(match cell.status() {
            CellStatus::Alive => '^',
            CellStatus::Burning => '*',
            CellStatus::Dead => '.',
        });
        if cell.col() + 1 == grid.cols() {
            frame.push('\n');
        }
    }
    print!("{frame}");
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = SimulationConfig {
        rows: Some(args.rows),
        cols: Some(args.cols),
        probability: Some(args.probability),
        init_tiles: Some(args.ignite.iter().map(|&(r, c)| [r, c]).collect()),
    };

    let rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_os_rng()),
    };

    // The demo loop below plays the role of the periodic scheduler.
    let mut controller = SimulationController::new(Box::new(ManualScheduler::new()), rng)
        .with_tick_interval(Duration::from_millis(args.interval_ms));

    controller.initialize(&config)?;
    controller.begin_run()?;

    println!("=== Forest-Fire Simulation ===");
    println!(
        "{}x{} grid, probability {}, {} initial tile(s)\n",
        args.rows,
        args.cols,
        args.probability,
        args.ignite.len().max(1)
    );

    loop {
        if let Some(grid) = controller.grid() {
            render(grid);
            println!();
        }

        let report = controller.tick()?;
        if report.is_quiescent() || controller.tick_count() >= args.max_ticks {
            break;
        }
        thread::sleep(Duration::from_millis(args.interval_ms));
    }

    controller.stop()?;
    let grid = controller.grid().ok_or("run vanished before inspection")?;
    render(grid);
    println!(
        "fire out after {} tick(s): {} alive, {} dead",
        controller.tick_count(),
        grid.count_with_status(CellStatus::Alive),
        grid.count_with_status(CellStatus::Dead)
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
