//! Python bindings for the rust-2048 engine.
//!
//! Exposes the engine API itself; observation encoding and reward shaping
//! are left to the Python side.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.Game2048(size=4, seed=42)
//! while not game.is_terminal():
//!     valid, score_delta, terminal = game.step(game.legal_moves()[0])
//! print(game.score, game.max_tile)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust-2048: a deterministic 2048 engine.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame2048>()?;
    m.add_class::<PyMoveResult>()?;
    Ok(())
}
