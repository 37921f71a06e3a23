//! Headless driver for the flock simulation.
//!
//! Runs a seeded flock for a fixed number of ticks and writes periodic JSON
//! snapshots for downstream renderers or analysis.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use murmuration::config::{FlockSettings, DEFAULT_CONFIG_PATH};
use murmuration::flock::FlockManager;
use murmuration::output;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "murmuration")]
#[command(about = "A headless 3D boid flocking simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Simulated seconds per tick
    #[arg(long, default_value_t = 0.02)]
    dt: f32,

    /// Path to the TOML settings file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Interval between snapshots, in ticks; 0 disables snapshots
    #[arg(long, default_value_t = 100)]
    snapshot_interval: u64,

    /// Directory snapshots are written into
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let settings = if args.config.exists() {
        match FlockSettings::from_file(&args.config) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("could not load {}: {}", args.config.display(), e);
                process::exit(1);
            }
        }
    } else {
        tracing::warn!("{} not found, using default settings", args.config.display());
        FlockSettings::default()
    };

    let mut flock = match FlockManager::new(settings, args.seed) {
        Ok(flock) => flock,
        Err(e) => {
            tracing::error!("invalid settings: {}", e);
            process::exit(1);
        }
    };

    if args.snapshot_interval > 0 {
        if let Err(e) = fs::create_dir_all(&args.output_dir) {
            tracing::warn!("could not create {}: {}", args.output_dir.display(), e);
        }
        write_snapshot(&flock, &args.output_dir);
    }

    tracing::info!(seed = args.seed, ticks = args.ticks, dt = args.dt, "starting simulation");

    for tick in 1..=args.ticks {
        flock.tick(args.dt);

        if args.snapshot_interval > 0 && tick % args.snapshot_interval == 0 {
            write_snapshot(&flock, &args.output_dir);
        }
        if tick % 100 == 0 {
            tracing::info!("tick {} / {}", tick, args.ticks);
        }
    }

    tracing::info!("simulation complete after {} ticks", args.ticks);
}

fn write_snapshot(flock: &FlockManager, dir: &Path) {
    let snapshot = flock.snapshot();
    if let Err(e) = output::write_snapshot_to_dir(&snapshot, dir) {
        tracing::warn!("could not write snapshot at tick {}: {}", snapshot.tick, e);
    }
}
