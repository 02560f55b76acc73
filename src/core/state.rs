//! Game state: board, score and the game's own RNG.
//!
//! ## GameState
//!
//! Complete state of one episode:
//! - Board and score
//! - Move count and terminal flag
//! - Configuration (spawn odds, win tile)
//! - Deterministic RNG
//! - Move history
//!
//! The caller owns every `GameState`. `Clone` is a full deep copy that
//! also copies the RNG position, so a clone replays the same spawns as
//! the original. Use [`GameState::fork`] for an independent chance stream.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::board::{Board, Spawn};
use super::config::GameConfig;
use super::direction::{Direction, DirectionSet, MoveRecord};
use super::error::{EngineError, EngineResult};
use super::rng::{GameRng, GameRngState};
use crate::rules::{self, MoveResult};

/// Full state of a 2048 game.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    score: u64,
    move_count: u32,
    terminal: bool,
    config: GameConfig,

    /// Deterministic RNG for spawns.
    pub rng: GameRng,

    /// Moves played this episode.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a new game: empty board plus two spawned tiles.
    pub fn new(config: &GameConfig) -> EngineResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => {
                let rng = GameRng::from_entropy();
                debug!("no seed given, drew seed {}", rng.seed());
                rng
            }
        };

        let mut state = Self {
            board: Board::empty(config.size),
            score: 0,
            move_count: 0,
            terminal: false,
            config: config.clone(),
            rng,
            history: Vector::new(),
        };
        state.spawn_initial_tiles()?;
        Ok(state)
    }

    /// Start from an explicit board, e.g. to set up a position.
    ///
    /// Score and move count start at zero; the terminal flag is computed
    /// from the board. The board keeps its shape for the whole game,
    /// including across [`GameState::reset`]; `config().size` reports the
    /// longer side.
    #[must_use]
    pub fn from_board(board: Board, seed: u64) -> Self {
        let terminal = rules::is_terminal(&board);
        let config = GameConfig::new()
            .with_size(board.rows().max(board.cols()))
            .with_seed(seed);
        Self {
            board,
            score: 0,
            move_count: 0,
            terminal,
            config,
            rng: GameRng::new(seed),
            history: Vector::new(),
        }
    }

    /// Clear the board and start a new episode.
    ///
    /// The board keeps its current shape. With a seed the RNG is reseeded;
    /// otherwise it continues its stream. Fails with `NoEmptyCell` on a
    /// board with fewer than two cells.
    pub fn reset(&mut self, seed: Option<u64>) -> EngineResult<()> {
        if let Some(seed) = seed {
            self.rng = GameRng::new(seed);
            self.config.seed = Some(seed);
        }
        self.board = Board::with_shape(self.board.rows(), self.board.cols());
        self.score = 0;
        self.move_count = 0;
        self.terminal = false;
        self.history = Vector::new();
        self.spawn_initial_tiles()
    }

    fn spawn_initial_tiles(&mut self) -> EngineResult<()> {
        self.spawn_tile()?;
        self.spawn_tile()?;
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of valid moves played.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Moves played this episode, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Highest tile on the board, 0 if empty.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }

    /// True once no direction can change the board.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// True if the winning tile has been reached.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.max_tile() >= self.config.win_tile
    }

    // === Moves ===

    /// Directions that would change the board now.
    #[must_use]
    pub fn legal_moves(&self) -> DirectionSet {
        if self.terminal {
            return DirectionSet::EMPTY;
        }
        rules::legal_moves(&self.board)
    }

    /// Slide in `direction`, then spawn a tile if anything moved.
    ///
    /// A move that changes nothing (including any move on a finished game)
    /// reports `valid = false` and leaves the state untouched.
    pub fn apply_move(&mut self, direction: Direction) -> EngineResult<MoveResult> {
        if self.terminal {
            return Ok(MoveResult::no_op(true));
        }

        let (next, slide) = rules::slide(&self.board, direction);
        if !slide.changed {
            trace!("{} is a no-op", direction);
            return Ok(MoveResult::no_op(false));
        }

        self.board = next;
        self.score += slide.score;
        self.move_count += 1;

        let spawned = self.spawn_tile()?;
        if self.terminal {
            debug!(
                "game over after {} moves: score {}, max tile {}",
                self.move_count,
                self.score,
                self.max_tile()
            );
        }

        self.history.push_back(MoveRecord {
            direction,
            score_delta: slide.score,
            spawned: Some(spawned),
            move_number: self.move_count,
        });

        Ok(MoveResult {
            valid: true,
            score_delta: slide.score,
            terminal: self.terminal,
            merges: slide.merges,
            spawned: Some(spawned),
        })
    }

    /// Apply a move given as an action index (0=Up, 1=Right, 2=Down, 3=Left).
    pub fn apply_action(&mut self, action: usize) -> EngineResult<MoveResult> {
        let direction = Direction::from_index(action)?;
        self.apply_move(direction)
    }

    /// Place a 2 or 4 in a uniformly random empty cell.
    ///
    /// The terminal flag is refreshed afterwards.
    pub fn spawn_tile(&mut self) -> EngineResult<Spawn> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return Err(EngineError::NoEmptyCell);
        }

        let idx = empty[self.rng.gen_range_usize(0..empty.len())];
        let value = self.rng.spawn_value(self.config.four_probability);
        let spawn = self.board.spawn_at(idx, value);
        self.terminal = rules::is_terminal(&self.board);
        trace!("spawned {} at ({}, {})", spawn.value, spawn.row, spawn.col);
        Ok(spawn)
    }

    // === Cloning ===

    /// Deep copy with an independent RNG branch (for search).
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            board: self.board.clone(),
            score: self.score,
            move_count: self.move_count,
            terminal: self.terminal,
            config: self.config.clone(),
            rng: self.rng.fork(),
            history: self.history.clone(),
        }
    }

    // === Snapshots ===

    /// Capture the full state, including the RNG position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            score: self.score,
            move_count: self.move_count,
            terminal: self.terminal,
            config: self.config.clone(),
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// The board is checked in full; its shape takes precedence over
    /// `config.size`.
    pub fn restore(snapshot: &GameSnapshot) -> EngineResult<Self> {
        snapshot.board.validate()?;
        snapshot.config.validate_rules()?;
        Ok(Self {
            board: snapshot.board.clone(),
            score: snapshot.score,
            move_count: snapshot.move_count,
            terminal: snapshot.terminal,
            config: snapshot.config.clone(),
            rng: GameRng::from_state(&snapshot.rng),
            history: snapshot.history.clone(),
        })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}  Max Tile: {}", self.score, self.max_tile())?;
        write!(f, "{}", self.board)
    }
}

/// Serializable capture of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub score: u64,
    pub move_count: u32,
    pub terminal: bool,
    pub config: GameConfig,
    pub rng: GameRngState,
    pub history: Vector<MoveRecord>,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    /// Decode bytes produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        bincode::deserialize(bytes).map_err(|e| EngineError::Snapshot(e.to_string()))
    }
}
