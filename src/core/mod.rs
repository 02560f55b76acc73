//! Core engine types: board, directions, state, RNG, configuration, errors.
//!
//! This module holds everything a caller needs to own and drive a game.
//! Move rules themselves live in `rules`.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;
pub mod state;

pub use board::{Board, Spawn, MAX_TILE};
pub use config::GameConfig;
pub use direction::{Direction, DirectionSet, MoveRecord};
pub use error::{EngineError, EngineResult};
pub use rng::{GameRng, GameRngState};
pub use state::{GameSnapshot, GameState};
