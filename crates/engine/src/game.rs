//! Game module - the spawn → fall → lock → clear cycle
//!
//! The engine owns the grid, the active piece and the next-shape queue. A driver calls
//! [`Engine::tick`] whenever it wants gravity to act and [`Engine::try_move`] /
//! [`Engine::try_rotate`] when the player acts; it reads everything back through the
//! accessors or a [`Snapshot`].
//!
//! Row clearing lags the lock by one tick: the fall step that locks a piece only records
//! the full rows, and the following spawn step removes them. Drivers can show the full
//! rows in between via [`Engine::pending_rows`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, trace};

use crate::config::EngineConfig;
use crate::core::{Grid, Piece};
use crate::rng::ShapeQueue;
use crate::snapshot::{ActiveSnapshot, Snapshot};
use crate::types::{cell_id, GridError, Shape};

/// Row at which a new piece is probed before it enters the field
const SPAWN_PROBE_Y: i32 = -1;

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    grid: Grid,
    active: Option<Piece>,
    queue: ShapeQueue<R>,
    /// Full rows recorded at the last lock, removed on the next spawn step
    pending_rows: Vec<usize>,
    lost: bool,
}

impl Engine<StdRng> {
    /// Create an engine seeded from the operating system
    pub fn new(config: EngineConfig) -> Result<Self, GridError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine whose shape sequence is fixed by `seed`
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine with an empty grid and an injected random source
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self::from_parts(Grid::new(config.width, config.height), rng))
    }

    /// Create an engine that starts from a prepared grid
    pub fn with_grid(grid: Grid, rng: R) -> Result<Self, GridError> {
        EngineConfig::new(grid.width(), grid.height()).validate()?;
        Ok(Self::from_parts(grid, rng))
    }

    fn from_parts(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            active: None,
            queue: ShapeQueue::new(rng),
            pending_rows: Vec::new(),
            lost: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_shape(&self) -> Shape {
        self.queue.peek()
    }

    pub fn pending_rows(&self) -> &[usize] {
        &self.pending_rows
    }

    pub fn lost(&self) -> bool {
        self.lost
    }

    /// Replace the queued shape; the next spawn step uses it
    pub fn set_next_shape(&mut self, shape: Shape) {
        self.queue.set_next(shape);
    }

    /// Advance the game by one step
    ///
    /// Without an active piece this is a spawn step: pending rows are cleared and the
    /// queued shape enters at the top; returns `true`. Otherwise the active piece falls
    /// one row, or locks if it cannot; returns `false`.
    ///
    /// After a loss every tick is ignored and returns `false`.
    pub fn tick(&mut self) -> bool {
        if self.lost {
            trace!("tick ignored after loss");
            return false;
        }

        if self.active.is_none() {
            self.spawn();
            return true;
        }

        self.fall();
        false
    }

    fn spawn(&mut self) {
        let rows = std::mem::take(&mut self.pending_rows);
        if !rows.is_empty() {
            self.grid.clear_rows(&rows);
            debug!(?rows, "cleared rows");
        }

        let shape = self.queue.draw();
        let mut piece = Piece::spawn(shape, self.grid.width());

        piece.y = SPAWN_PROBE_Y;
        let blocked = !piece.can_fall(&self.grid);
        piece.y = 0;

        if blocked {
            self.lost = true;
            self.lock(&piece);
            info!(shape = shape.as_str(), x = piece.x, "spawn blocked, game lost");
            return;
        }

        debug!(shape = shape.as_str(), x = piece.x, next = self.queue.peek().as_str(), "spawned");
        self.active = Some(piece);
    }

    fn fall(&mut self) {
        let Some(piece) = self.active.as_mut() else {
            return;
        };

        if piece.can_fall(&self.grid) {
            piece.y += 1;
            return;
        }

        let piece = *piece;
        self.active = None;
        self.lock(&piece);
        self.pending_rows = self.grid.full_rows();
        debug!(
            shape = piece.shape.as_str(),
            x = piece.x,
            y = piece.y,
            full_rows = ?self.pending_rows,
            "locked"
        );
    }

    fn lock(&mut self, piece: &Piece) {
        if let Err(err) = piece.lock(&mut self.grid) {
            error!(%err, ?piece, "piece could not be locked");
        }
    }

    /// Shift the active piece horizontally; `false` if rejected or nothing is falling
    pub fn try_move(&mut self, dx: i32) -> bool {
        if self.lost {
            return false;
        }
        let moved = match self.active.as_mut() {
            Some(piece) => piece.try_move(&self.grid, dx),
            None => false,
        };
        if !moved {
            trace!(dx, "move rejected");
        }
        moved
    }

    /// Rotate the active piece in place; `false` if rejected or nothing is falling
    pub fn try_rotate(&mut self, d_clockwise: i32) -> bool {
        if self.lost {
            return false;
        }
        let rotated = match self.active.as_mut() {
            Some(piece) => piece.try_rotate(&self.grid, d_clockwise),
            None => false,
        };
        if !rotated {
            trace!(d_clockwise, "rotation rejected");
        }
        rotated
    }

    /// Start over on an empty grid of the same size
    pub fn restart(&mut self) {
        self.grid.clear();
        self.active = None;
        self.pending_rows.clear();
        self.lost = false;
        self.queue.redraw();
        debug!("restarted");
    }

    /// Copy the current state into an existing snapshot, reusing its buffers
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells
            .extend(self.grid.cells().iter().map(|&cell| cell_id(cell)));
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.queue.peek();
        out.pending_rows.clear();
        out.pending_rows.extend_from_slice(&self.pending_rows);
        out.lost = self.lost;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
