//! Board storage: a flat row-major grid of tile values.
//!
//! A cell holds 0 (empty) or a power of two ≥ 2. Boards created by the
//! engine are square; boards built with [`Board::from_rows`] may be
//! rectangular so single lines can be examined in isolation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::direction::Direction;
use super::error::{EngineError, EngineResult};

/// Cell storage. Inline up to 4×4 so the default board never allocates.
pub type Cells = SmallVec<[u32; 16]>;

/// Largest tile a cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// A tile placed by the spawn rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// A grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Cells,
}

impl Board {
    /// Create an empty size × size board.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self::with_shape(size, size)
    }

    /// Create an empty rows × cols board.
    #[must_use]
    pub fn with_shape(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: SmallVec::from_elem(0, rows * cols),
        }
    }

    /// Build a board from explicit rows.
    ///
    /// Rows must be non-empty and of equal length, and every value must be
    /// 0 or a power of two ≥ 2.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> EngineResult<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.is_empty() || cols == 0 {
            return Err(EngineError::config("board must have at least one cell"));
        }

        let mut cells = Cells::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(EngineError::config(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(EngineError::config(format!(
                        "cell ({}, {}) holds {}, which is not a tile value",
                        r, c, value
                    )));
                }
                cells.push(value);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Check the shape and every cell value.
    ///
    /// Boards built through this module always pass; decoded boards may not.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::config("board must have at least one cell"));
        }
        if self.rows.checked_mul(self.cols) != Some(self.cells.len()) {
            return Err(EngineError::config(format!(
                "board is {}x{} but holds {} cells",
                self.rows,
                self.cols,
                self.cells.len()
            )));
        }
        if let Some(i) = self.cells.iter().position(|&v| !is_tile_value(v)) {
            return Err(EngineError::config(format!(
                "cell ({}, {}) holds {}, which is not a tile value",
                i / self.cols,
                i % self.cols,
                self.cells[i]
            )));
        }
        Ok(())
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Value at (row, col). Panics if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.index(row, col)]
    }

    /// Copy of the board as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.cols).map(<[u32]>::to_vec).collect()
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "cell ({}, {}) out of bounds", row, col);
        row * self.cols + col
    }

    // === Lines ===

    /// Number of independent lines a move in `direction` operates on.
    #[must_use]
    pub fn line_count(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.rows
        } else {
            self.cols
        }
    }

    /// Length of each line for `direction`.
    #[must_use]
    pub fn line_len(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.cols
        } else {
            self.rows
        }
    }

    /// Flat cell indices of line `line`, starting at the edge tiles move toward.
    pub fn line_indices(&self, direction: Direction, line: usize) -> impl Iterator<Item = usize> {
        let (rows, cols) = (self.rows, self.cols);
        let len = self.line_len(direction);
        (0..len).map(move |k| match direction {
            Direction::Left => line * cols + k,
            Direction::Right => line * cols + (cols - 1 - k),
            Direction::Up => k * cols + line,
            Direction::Down => (rows - 1 - k) * cols + line,
        })
    }

    // === Queries ===

    /// Row-major flat indices of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[usize; 16]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    #[must_use]
    pub fn count_tiles(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    /// Highest tile on the board, 0 if empty.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// True if two orthogonally adjacent cells hold the same mergeable tile.
    #[must_use]
    pub fn has_adjacent_equal(&self) -> bool {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let v = self.get(r, c);
                if !can_merge(v) {
                    continue;
                }
                if c + 1 < self.cols && self.get(r, c + 1) == v {
                    return true;
                }
                if r + 1 < self.rows && self.get(r + 1, c) == v {
                    return true;
                }
            }
        }
        false
    }

    /// True if no direction can change this board.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.count_empty() == 0 && !self.has_adjacent_equal()
    }

    /// Write a spawned tile at a flat index.
    pub(crate) fn spawn_at(&mut self, flat_index: usize, value: u32) -> Spawn {
        self.cells[flat_index] = value;
        Spawn {
            row: flat_index / self.cols,
            col: flat_index % self.cols,
            value,
        }
    }
}

/// True for 0 and powers of two from 2 to [`MAX_TILE`].
#[must_use]
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// True if two tiles of `value` may merge into one.
#[must_use]
pub fn can_merge(value: u32) -> bool {
    value != 0 && value < MAX_TILE
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.cols * 7 + 1);
        writeln!(f, "{}", rule)?;
        for r in 0..self.rows {
            write!(f, "|")?;
            for &cell in self.row(r) {
                if cell == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, " {:4} |", cell)?;
                }
            }
            writeln!(f)?;
            write!(f, "{}", rule)?;
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
