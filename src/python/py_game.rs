//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Direction, EngineError, GameConfig, GameState};
use crate::rules::MoveResult;

fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for MoveResult.
#[pyclass(name = "MoveResult")]
#[derive(Clone, Debug)]
pub struct PyMoveResult(pub MoveResult);

#[pymethods]
impl PyMoveResult {
    #[getter]
    fn valid(&self) -> bool {
        self.0.valid
    }

    #[getter]
    fn score_delta(&self) -> u64 {
        self.0.score_delta
    }

    #[getter]
    fn terminal(&self) -> bool {
        self.0.terminal
    }

    #[getter]
    fn merges(&self) -> u32 {
        self.0.merges
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveResult(valid={}, score_delta={}, terminal={})",
            self.0.valid, self.0.score_delta, self.0.terminal
        )
    }
}

/// Python wrapper for a 2048 game.
///
/// Actions are indices: 0=up, 1=right, 2=down, 3=left.
#[pyclass(name = "Game2048")]
pub struct PyGame2048 {
    state: GameState,
}

#[pymethods]
impl PyGame2048 {
    /// Create a new game.
    ///
    /// # Arguments
    /// - size: Board edge length (at least 2)
    /// - seed: RNG seed; None draws one from OS entropy
    /// - four_probability: Chance that a spawned tile is a 4
    #[new]
    #[pyo3(signature = (size = 4, seed = None, four_probability = 0.1))]
    fn new(size: usize, seed: Option<u64>, four_probability: f64) -> PyResult<Self> {
        let mut config = GameConfig::new()
            .with_size(size)
            .with_four_probability(four_probability);
        config.seed = seed;
        let state = GameState::new(&config).map_err(to_py_err)?;
        Ok(Self { state })
    }

    /// Apply an action; returns (valid, score_delta, terminal).
    fn step(&mut self, action: usize) -> PyResult<(bool, u64, bool)> {
        let result = self.state.apply_action(action).map_err(to_py_err)?;
        Ok((result.valid, result.score_delta, result.terminal))
    }

    /// Apply an action and return the full MoveResult.
    fn apply_move(&mut self, action: usize) -> PyResult<PyMoveResult> {
        self.state.apply_action(action).map(PyMoveResult).map_err(to_py_err)
    }

    /// Legal action indices in ascending order.
    fn legal_moves(&self) -> Vec<usize> {
        self.state.legal_moves().iter().map(Direction::index).collect()
    }

    /// Start a new episode, optionally reseeding.
    #[pyo3(signature = (seed = None))]
    fn reset(&mut self, seed: Option<u64>) -> PyResult<()> {
        self.state.reset(seed).map_err(to_py_err)
    }

    /// Board as a (size, size) uint32 numpy array.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let board = self.state.board();
        PyArray1::from_slice_bound(py, board.cells())
            .reshape([board.rows(), board.cols()])
    }

    /// Board as nested lists.
    fn board_rows(&self) -> Vec<Vec<u32>> {
        self.state.board().to_rows()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.state.score()
    }

    #[getter]
    fn max_tile(&self) -> u32 {
        self.state.max_tile()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    fn has_won(&self) -> bool {
        self.state.has_won()
    }

    /// Independent copy that replays the same spawns.
    fn copy(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    /// Independent copy with its own chance stream.
    fn fork(&mut self) -> Self {
        Self {
            state: self.state.fork(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Game2048(score={}, max_tile={}, moves={}, terminal={})",
            self.state.score(),
            self.state.max_tile(),
            self.state.move_count(),
            self.state.is_terminal()
        )
    }

    fn __str__(&self) -> String {
        self.state.to_string()
    }
}
