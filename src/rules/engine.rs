//! Board-level move rules.
//!
//! These functions are pure: they read a board and return a new one.
//! `GameState` layers scoring, spawning and terminal tracking on top.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::board::{Board, Spawn};
use crate::core::direction::{Direction, DirectionSet};

use super::line::merge_line;

/// Result of applying a move to a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// True if the move changed the board.
    pub valid: bool,
    /// Score gained by merges in this move.
    pub score_delta: u64,
    /// True if no further move is possible.
    pub terminal: bool,
    /// Number of merges performed.
    pub merges: u32,
    /// Tile spawned after a valid move.
    pub spawned: Option<Spawn>,
}

impl MoveResult {
    /// Result of a move that changed nothing.
    #[must_use]
    pub fn no_op(terminal: bool) -> Self {
        Self {
            terminal,
            ..Self::default()
        }
    }
}

/// Outcome of sliding a whole board, before any spawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideOutcome {
    pub score: u64,
    pub merges: u32,
    pub changed: bool,
}

/// Slide every line of `board` in `direction`, in place.
pub fn slide_in_place(board: &mut Board, direction: Direction) -> SlideOutcome {
    let mut outcome = SlideOutcome::default();
    let mut line: SmallVec<[u32; 8]> = SmallVec::new();
    let mut indices: SmallVec<[usize; 8]> = SmallVec::new();

    for l in 0..board.line_count(direction) {
        indices.clear();
        indices.extend(board.line_indices(direction, l));

        let cells = board.cells_mut();
        line.clear();
        line.extend(indices.iter().map(|&i| cells[i]));

        let line_outcome = merge_line(&mut line);
        if line_outcome.changed {
            for (&i, &v) in indices.iter().zip(line.iter()) {
                cells[i] = v;
            }
            outcome.changed = true;
        }
        outcome.score += line_outcome.score;
        outcome.merges += line_outcome.merges;
    }

    outcome
}

/// Return the board produced by sliding `board` in `direction`.
#[must_use]
pub fn slide(board: &Board, direction: Direction) -> (Board, SlideOutcome) {
    let mut next = board.clone();
    let outcome = slide_in_place(&mut next, direction);
    (next, outcome)
}

/// True if sliding in `direction` would change `board`.
#[must_use]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    slide(board, direction).1.changed
}

/// Directions that would change `board`.
#[must_use]
pub fn legal_moves(board: &Board) -> DirectionSet {
    if board.is_stuck() {
        return DirectionSet::EMPTY;
    }
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(board, d))
        .collect()
}

/// True if no direction changes `board`.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    board.is_stuck()
}
