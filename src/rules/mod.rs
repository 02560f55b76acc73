//! 2048 move rules.
//!
//! - `line`: slide and merge of a single row or column
//! - `engine`: whole-board slides, legal moves and terminal detection
//!
//! Everything here is pure; `GameState` owns mutation and spawning.

pub mod engine;
pub mod line;

pub use engine::{can_move, is_terminal, legal_moves, slide, slide_in_place, MoveResult, SlideOutcome};
pub use line::{merge_line, LineOutcome};
