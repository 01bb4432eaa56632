//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data: the grid, the piece logic and any driver
//! can depend on it without pulling in game rules.
//!
//! # Grid Dimensions
//!
//! Default playfield dimensions (configurable per engine):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn column**: `width / 2 - 1` (4 on the default grid)
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Shape, GRID_HEIGHT, GRID_WIDTH};
//!
//! let shape = Shape::from_str("t").unwrap();
//! assert_eq!(shape, Shape::T);
//! assert_eq!(shape.id(), 1);
//! assert_eq!(Shape::from_id(shape.id()), Some(Shape::T));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Default grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Number of concrete shapes
pub const SHAPE_COUNT: usize = 7;

/// Narrowest grid on which every shape can spawn (the I piece reaches one column left of
/// the spawn column and two to the right)
pub const MIN_GRID_WIDTH: usize = 4;

/// Shortest grid on which a spawned piece fits
pub const MIN_GRID_HEIGHT: usize = 2;

/// The seven tetromino shapes
///
/// Declaration order is the table order: T, L, J, I, S, Z, O.
/// The render id of a shape is its position in that order plus one, so that
/// `0` is free to mean "empty" in integer exports of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    T,
    L,
    J,
    I,
    S,
    Z,
    O,
}

impl Shape {
    /// All shapes in table order
    pub const ALL: [Shape; SHAPE_COUNT] = [
        Shape::T,
        Shape::L,
        Shape::J,
        Shape::I,
        Shape::S,
        Shape::Z,
        Shape::O,
    ];

    /// Position in [`Shape::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Shape at a table position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Render id in `1..=7`
    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`Shape::id`]; `0` and anything above 7 yield `None`
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => None,
            n => Self::from_index(n as usize - 1),
        }
    }

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("O"), Some(Shape::O));
    /// assert_eq!(Shape::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(Shape::T),
            "l" => Some(Shape::L),
            "j" => Some(Shape::J),
            "i" => Some(Shape::I),
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            "o" => Some(Shape::O),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::T => "t",
            Shape::L => "l",
            Shape::J => "j",
            Shape::I => "i",
            Shape::S => "s",
            Shape::Z => "z",
            Shape::O => "o",
        }
    }
}

/// Uniform over the seven shapes
impl Distribution<Shape> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        Shape::ALL[rng.random_range(0..SHAPE_COUNT)]
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(Shape)`: occupied by a locked block of that shape
pub type Cell = Option<Shape>;

/// Render id of a cell: `0` for empty, [`Shape::id`] otherwise
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, Shape::id)
}

/// Errors raised by grid access and grid construction
///
/// Rejected moves and rotations are not errors; they are reported as `false`
/// by the piece operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A cell outside the grid was read or written
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    ContractViolation {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    /// The requested dimensions cannot host a spawned piece
    #[error(
        "a {width}x{height} grid is too small (minimum {min_w}x{min_h})",
        min_w = MIN_GRID_WIDTH,
        min_h = MIN_GRID_HEIGHT
    )]
    InvalidDimensions { width: usize, height: usize },
    /// Text rows passed to grid construction differ in length
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_ids_are_one_based_in_table_order() {
        let ids: Vec<u8> = Shape::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
        for shape in Shape::ALL {
            assert_eq!(Shape::from_id(shape.id()), Some(shape));
            assert_eq!(Shape::from_index(shape.index()), Some(shape));
        }
        assert_eq!(Shape::from_id(0), None);
        assert_eq!(Shape::from_id(8), None);
    }

    #[test]
    fn sampling_covers_every_shape() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; SHAPE_COUNT];
        for _ in 0..500 {
            let shape: Shape = rng.random();
            seen[shape.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn cell_id_maps_empty_to_zero() {
        assert_eq!(cell_id(None), 0);
        assert_eq!(cell_id(Some(Shape::O)), 7);
    }

    #[test]
    fn contract_violation_message_names_the_cell() {
        let err = GridError::ContractViolation {
            x: -1,
            y: 3,
            width: 10,
            height: 20,
        };
        assert_eq!(err.to_string(), "cell (-1, 3) is outside the 10x20 grid");
    }
}
