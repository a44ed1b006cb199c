//! The board grid.
//!
//! A `rows x columns` matrix of cells stored as a flat buffer indexed by
//! `row * columns + col`. Row 0 is the top of the board; tokens fall to the
//! highest row index available in their column (gravity).
//!
//! The grid is a derived cache of the move log. Only the engine mutates it,
//! and queries hand out copies, so external code can never push the grid out
//! of sync with the log.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No token placed here yet.
    #[default]
    Empty,
    /// A token belonging to the given player.
    Occupied(PlayerId),
}

impl Cell {
    /// Check whether this cell is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The occupying player, if any.
    #[must_use]
    pub fn occupant(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

/// The board: a flat `rows * columns` cell buffer.
///
/// Dimensions are fixed at construction. The engine accepts any positive
/// dimensions; the product-level 4-10 range is enforced by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0, "Grid must have at least 1 row");
        assert!(columns > 0, "Grid must have at least 1 column");

        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at `(row, col)`.
    ///
    /// Returns `Cell::Empty` for out-of-bounds coordinates so that line
    /// scans can probe past the edge without branching.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.columns {
            return Cell::Empty;
        }
        self.cells[row * self.columns + col]
    }

    /// Check whether `col` refers to a column on this board.
    #[must_use]
    pub fn column_in_range(&self, col: usize) -> bool {
        col < self.columns
    }

    /// A column is full when its topmost cell is occupied.
    ///
    /// Out-of-range columns report full, matching the "cannot accept a
    /// token" meaning callers rely on.
    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// The row a token dropped in `col` would land in, scanning from the
    /// bottom row upward. `None` if the column is full or out of range.
    #[must_use]
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.columns {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, col).is_empty())
    }

    /// Check whether every column is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Reset every cell to empty, keeping dimensions.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Set a cell. Engine-internal: all external mutation goes through
    /// engine operations so the grid stays consistent with the move log.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.rows && col < self.columns);
        self.cells[row * self.columns + col] = cell;
    }

    /// Iterate over `(row, col, cell)` triples in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.columns, i % self.columns, cell))
    }
}
