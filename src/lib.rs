//! # rust-2048
//!
//! A deterministic 2048 game engine for RL and search experiments.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: A `GameState` is a plain value. The engine keeps
//!    no registry of live games and no global randomness.
//!
//! 2. **Explicit Randomness**: Every game owns a seeded ChaCha8 stream.
//!    Same seed, same moves, same game.
//!
//! 3. **Results, Not Errors**: A move that changes nothing is an ordinary
//!    `MoveResult { valid: false, .. }`. Errors are reserved for caller bugs.
//!
//! ## Architecture
//!
//! - **Value Boards**: Flat row-major cells in a `SmallVec`, so a 4×4 board
//!   clones without touching the heap.
//!
//! - **Search Support**: `Clone` replays the same spawns; `fork` gives an
//!   independent deterministic chance stream for each branch.
//!
//! ## Modules
//!
//! - `core`: Board, directions, state, RNG, configuration, errors
//! - `rules`: Line merge, board slides, legal moves, terminal detection
//! - `eval`: Fixed policies and episode statistics for headless runs
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, GameConfig, GameState};
//!
//! let mut game = GameState::new(&GameConfig::new().with_seed(42)).unwrap();
//! for direction in game.legal_moves().iter() {
//!     let mut probe = game.clone();
//!     let result = probe.apply_move(direction).unwrap();
//!     assert!(result.valid);
//! }
//! let result = game.apply_move(Direction::Left).unwrap();
//! assert!(game.score() >= result.score_delta);
//! ```

pub mod core;
pub mod eval;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Spawn,
    Direction, DirectionSet, MoveRecord,
    EngineError, EngineResult,
    GameConfig,
    GameRng, GameRngState,
    GameSnapshot, GameState,
};

pub use crate::rules::{LineOutcome, MoveResult, SlideOutcome};

pub use crate::eval::{EpisodeStats, EvalSummary, GreedyPolicy, Policy, RandomPolicy};

/// Create a new size × size game, optionally seeded.
pub fn initialize(size: usize, seed: Option<u64>) -> EngineResult<GameState> {
    let mut config = GameConfig::new().with_size(size);
    config.seed = seed;
    GameState::new(&config)
}
