//! Tick Tetris (workspace facade crate).
//!
//! Re-exports the rule crates under `tick_tetris::{core,engine,types}` and hosts the
//! headless [`driver`] used by the `tick-tetris` binary.

pub mod driver;

pub use tick_tetris_core as core;
pub use tick_tetris_engine as engine;
pub use tick_tetris_types as types;
