//! Core rules module - the grid and the falling piece
//!
//! This crate holds the rules that decide what is legal: collision, rotation validity,
//! full-row detection and row compaction. It has **no dependencies** on timing,
//! randomness or I/O; the engine crate sequences these rules into a game.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size grid with bounds-checked access and row compaction
//! - [`pieces`]: static rotation tables for the seven shapes
//! - [`faller`]: the falling piece and its checked move/rotate/fall/lock operations
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::{Grid, Piece};
//! use tick_tetris_types::Shape;
//!
//! let mut grid = Grid::new(10, 20);
//! let mut piece = Piece::spawn(Shape::I, grid.width());
//!
//! assert!(piece.try_move(&grid, -3));
//! while piece.can_fall(&grid) {
//!     piece.y += 1;
//! }
//! piece.lock(&mut grid).unwrap();
//!
//! assert_eq!(grid.get(0, 19), Ok(Some(Shape::I)));
//! assert_eq!(grid.get(4, 19), Ok(None));
//! ```

pub mod faller;
pub mod grid;
pub mod pieces;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use faller::Piece;
pub use grid::Grid;
pub use pieces::{get_blocks, variants, Blocks};
