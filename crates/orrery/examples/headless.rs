//! Run a scenario without a renderer and print per-year diagnostics
//!
//! Run with: cargo run --package orrery --example headless -- --years 20
//! Scenario files: cargo run --package orrery --example headless -- -f scenarios/binary_pair.toml
//! Set RUST_LOG=orrery=debug to see controller events.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orrery::{Simulation, SimulationConfig, BASE_DT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file (.yaml or .toml); the built-in solar system when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Simulated years to run
    #[arg(short, long, default_value_t = 10)]
    years: u32,

    /// Integration steps per frame
    #[arg(short, long, default_value_t = 4)]
    steps_per_frame: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.file {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    let mut sim = Simulation::from_config(&config)?;
    sim.set_running(true);

    let steps_per_year = (1.0 / BASE_DT).round() as usize;
    let frames_per_year = steps_per_year.div_ceil(args.steps_per_frame.max(1));
    let e0 = sim.total_energy();

    println!("{} bodies, time scale {}x", sim.bodies().len(), sim.time_scale());
    println!("{}", "=".repeat(60));

    for year in 1..=args.years {
        for _ in 0..frames_per_year {
            sim.step(args.steps_per_frame);
        }

        let energy = sim.total_energy();
        println!(
            "year {:>3}: t={:>8.3}  steps={:>6}  ΔE/E={:+.2e}  |p|={:.1e}",
            year,
            sim.time(),
            sim.step_count(),
            (energy - e0) / e0,
            sim.state().total_momentum().magnitude()
        );
    }

    println!("{}", "=".repeat(60));
    for body in sim.bodies() {
        println!(
            "{:<10} r={:>8.4} AU  v={:>7.4} AU/yr  trail={:>3}",
            body.name,
            body.position.coords.magnitude(),
            body.speed(),
            body.trail().len()
        );
    }

    Ok(())
}
