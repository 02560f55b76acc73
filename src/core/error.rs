//! Engine error types.
//!
//! Only caller programming errors are reported here. A no-op move or a
//! finished game is an ordinary [`MoveResult`](crate::rules::MoveResult),
//! never an error.

use thiserror::Error;

/// Errors reported by the game engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bad construction parameters (board size, spawn odds, explicit board).
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Action index or name outside the four directions.
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    /// A tile spawn was requested on a board with no empty cell.
    #[error("No empty cell to spawn a tile")]
    NoEmptyCell,

    /// Snapshot bytes could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl EngineError {
    /// Build an `InvalidConfiguration` error.
    pub fn config(reason: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration { reason: reason.into() }
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
