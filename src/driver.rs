//! Headless driver - runs the engine without a screen or keyboard.
//!
//! This is the thinnest possible control loop: issue ticks until the game is lost or a
//! tick budget runs out, optionally playing a random move after every spawn. Each spawn
//! step hands a [`Snapshot`] to a caller-supplied sink (the binary prints them as JSON).

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info};

use crate::engine::{Engine, Snapshot};

/// Loop limits and player behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after this many ticks even if the game is still running
    pub max_ticks: u64,
    /// Rotate and shift every new piece at random
    pub autoplay: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_ticks: 10_000,
            autoplay: false,
        }
    }
}

/// What happened during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub spawns: u64,
    pub rows_cleared: u64,
    pub lost: bool,
}

/// Drive `engine` until loss or `options.max_ticks`
///
/// `player` feeds the autoplay choices and is kept apart from the engine's own random
/// source, so the shape sequence does not depend on whether autoplay is on.
pub fn run<R, P, F>(
    engine: &mut Engine<R>,
    options: &RunOptions,
    player: &mut P,
    mut on_spawn: F,
) -> Result<RunSummary>
where
    R: Rng,
    P: Rng,
    F: FnMut(&Snapshot) -> Result<()>,
{
    let mut summary = RunSummary::default();
    let mut snapshot = Snapshot::default();
    // Loss only happens on a spawn step, and every spawn step refreshes the snapshot
    engine.snapshot_into(&mut snapshot);

    while snapshot.playable() && summary.ticks < options.max_ticks {
        let clearing = if engine.active().is_none() {
            engine.pending_rows().len() as u64
        } else {
            0
        };

        let spawned = engine.tick();
        summary.ticks += 1;

        if !spawned {
            continue;
        }

        summary.spawns += 1;
        summary.rows_cleared += clearing;

        engine.snapshot_into(&mut snapshot);
        if options.autoplay && snapshot.playable() {
            play_random(engine, player);
            engine.snapshot_into(&mut snapshot);
        }

        on_spawn(&snapshot)?;
    }

    summary.lost = !snapshot.playable();
    info!(
        ticks = summary.ticks,
        spawns = summary.spawns,
        rows_cleared = summary.rows_cleared,
        lost = summary.lost,
        "run finished"
    );
    Ok(summary)
}

/// Rotate the fresh piece a random amount, then slide it towards a random column
fn play_random<R: Rng, P: Rng>(engine: &mut Engine<R>, player: &mut P) {
    let turns = player.random_range(0..4);
    for _ in 0..turns {
        engine.try_rotate(1);
    }

    let shift: i32 = player.random_range(-5..=5);
    let step = shift.signum();
    let mut moved = 0;
    while moved != shift && engine.try_move(step) {
        moved += step;
    }

    debug!(turns, shift, moved, "autoplay");
}
