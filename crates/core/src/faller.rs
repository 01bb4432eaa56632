//! Faller module - the piece currently dropping through the grid
//!
//! A piece never commits an illegal state: every move, rotation and fall is tested
//! against the grid first and only then applied. A rejected candidate leaves the piece
//! untouched and reports `false`.

use crate::pieces::{get_blocks, spawn_x, Blocks, ROTATION_STATES};
use crate::types::{GridError, Shape};
use crate::Grid;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    /// Rotation index in `0..4`; shapes with fewer variants wrap onto their table
    pub rotation: u8,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece at rotation 0 anchored at (x, y)
    pub fn new(shape: Shape, x: i32, y: i32) -> Self {
        Self {
            shape,
            rotation: 0,
            x,
            y,
        }
    }

    /// Create a piece at the spawn anchor of a grid of the given width (top row)
    pub fn spawn(shape: Shape, grid_width: usize) -> Self {
        Self::new(shape, spawn_x(grid_width), 0)
    }

    fn candidate_rotation(&self, rotation_delta: i32) -> u8 {
        let states = ROTATION_STATES as i32;
        // Reduce first so any i32 delta is safe to subtract
        let delta = rotation_delta.rem_euclid(states);
        ((self.rotation as i32 % states + states - delta) % states) as u8
    }

    /// Block offsets for the rotation `rotation - rotation_delta`
    ///
    /// With a delta of 0 these are the blocks the piece occupies now; any other delta
    /// previews a rotation without changing the piece.
    pub fn blocks(&self, rotation_delta: i32) -> Blocks {
        get_blocks(self.shape, self.candidate_rotation(rotation_delta))
    }

    /// Absolute grid coordinates of [`Piece::blocks`]
    ///
    /// Coordinates saturate at the `i32` range, which no grid reaches.
    pub fn cells(&self, rotation_delta: i32) -> [(i32, i32); 4] {
        self.blocks(rotation_delta)
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    /// Check whether the piece, shifted by (dx, dy) and rotated by `rotation_delta`,
    /// lies entirely on empty in-bounds cells
    ///
    /// A shift that overflows `i32` does not fit.
    pub fn fits(&self, grid: &Grid, dx: i32, dy: i32, rotation_delta: i32) -> bool {
        self.blocks(rotation_delta).iter().all(|&(bx, by)| {
            let x = self.x.checked_add(bx).and_then(|x| x.checked_add(dx));
            let y = self.y.checked_add(by).and_then(|y| y.checked_add(dy));
            matches!((x, y), (Some(x), Some(y)) if grid.is_vacant(x, y))
        })
    }

    /// Check whether every block can drop one row
    pub fn can_fall(&self, grid: &Grid) -> bool {
        self.fits(grid, 0, 1, 0)
    }

    /// Write the piece's shape into every cell it covers
    ///
    /// Cells are checked before anything is written, so a contract violation leaves the
    /// grid untouched. Occupied cells are overwritten.
    pub fn lock(&self, grid: &mut Grid) -> Result<(), GridError> {
        let cells = self.cells(0);
        for &(x, y) in &cells {
            grid.get(x, y)?;
        }
        for (x, y) in cells {
            grid.set(x, y, Some(self.shape))?;
        }
        Ok(())
    }

    /// Shift horizontally by `dx` if the destination is free
    pub fn try_move(&mut self, grid: &Grid, dx: i32) -> bool {
        if !self.fits(grid, dx, 0, 0) {
            return false;
        }
        self.x += dx;
        true
    }

    /// Rotate in place by `d_clockwise` steps if the new orientation is free
    pub fn try_rotate(&mut self, grid: &Grid, d_clockwise: i32) -> bool {
        if !self.fits(grid, 0, 0, d_clockwise) {
            return false;
        }
        self.rotation = self.candidate_rotation(d_clockwise);
        true
    }
}
