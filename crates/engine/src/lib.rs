//! Game engine - sequences the core rules into a playable game
//!
//! The engine is driven entirely from outside: it has no timers, spawns no threads and
//! never blocks. A driver decides when gravity acts ([`Engine::tick`]) and when the
//! player acts ([`Engine::try_move`], [`Engine::try_rotate`]), and reads state back for
//! drawing.
//!
//! # Module Structure
//!
//! - [`config`]: grid dimensions and their validation
//! - [`game`]: the spawn → fall → lock → clear cycle and loss detection
//! - [`rng`]: uniform next-shape selection over an injected random source
//! - [`snapshot`]: per-frame view of the state for renderers
//!
//! # Example
//!
//! ```
//! use tick_tetris_engine::{Engine, EngineConfig};
//!
//! let mut engine = Engine::seeded(EngineConfig::default(), 12345).unwrap();
//!
//! assert!(engine.tick()); // spawn step
//! engine.try_move(-1);
//! engine.try_rotate(1);
//!
//! while !engine.tick() {} // fall until the next spawn
//! assert!(engine.active().is_some());
//! assert!(!engine.lost());
//! ```
//!
//! # Loss
//!
//! A spawn that cannot enter the field sets the loss flag and locks the piece where it
//! appeared. From then on `tick`, `try_move` and `try_rotate` do nothing and return
//! `false`; [`Engine::restart`] begins a new game.

pub mod config;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use config::EngineConfig;
pub use game::Engine;
pub use rng::ShapeQueue;
pub use snapshot::{ActiveSnapshot, Snapshot};
