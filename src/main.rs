//! Headless Tetris runner (default binary).
//!
//! Plays one game without a screen: ticks until the stack reaches the top (or the tick
//! budget runs out), then prints the final grid. `--json` streams one snapshot per spawn
//! for an external renderer; logs go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use tick_tetris::driver::{run, RunOptions};
use tick_tetris::engine::{Engine, EngineConfig};
use tick_tetris::types::{GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "tick-tetris", about = "Run a headless falling-block game")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: usize,

    /// Seed for the shape sequence (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long, default_value_t = RunOptions::default().max_ticks)]
    max_ticks: u64,

    /// Rotate and shift every new piece at random
    #[arg(long)]
    autoplay: bool,

    /// Print a JSON snapshot to stdout after every spawn
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let config = EngineConfig::new(cli.width, cli.height);
    info!(seed, width = config.width, height = config.height, "starting");

    let mut engine = Engine::seeded(config, seed).context("cannot create engine")?;
    let mut player = StdRng::seed_from_u64(seed.wrapping_add(1));
    let options = RunOptions {
        max_ticks: cli.max_ticks,
        autoplay: cli.autoplay,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = run(&mut engine, &options, &mut player, |snapshot| {
        if cli.json {
            serde_json::to_writer(&mut out, snapshot)?;
            writeln!(out)?;
        }
        Ok(())
    })?;

    if !cli.json {
        write!(out, "{}", engine.grid())?;
        writeln!(
            out,
            "seed {}: {} ticks, {} pieces, {} rows cleared, {}",
            seed,
            summary.ticks,
            summary.spawns,
            summary.rows_cleared,
            if summary.lost { "lost" } else { "stopped" }
        )?;
    }

    Ok(())
}
