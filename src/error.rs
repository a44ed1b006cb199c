//! Engine error taxonomy.
//!
//! Every expected failure (full column, game over, empty history) is a
//! routine outcome returned as a value; no engine operation panics or uses
//! errors for control flow. All variants except `CorruptState` leave the
//! engine untouched, so the caller can simply report and continue.

use thiserror::Error;

/// Failure values returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A move named a column the board does not have.
    #[error("column {column} out of range for a board with {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },

    /// A move named a column whose topmost cell is already occupied.
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    /// A move was attempted after the game was won or drawn.
    #[error("game is already over")]
    GameOver,

    /// Undo was attempted with an empty move log.
    #[error("no moves to undo")]
    EmptyHistory,

    /// History navigation named an index outside the move log.
    #[error("move index {index} out of range for a log of {len} moves")]
    IndexOutOfRange { index: usize, len: usize },

    /// A stored snapshot failed its replay consistency check. Unlike the
    /// other variants this is a hard failure: the snapshot is unusable.
    #[error("corrupt snapshot: {0}")]
    CorruptState(String),
}

impl EngineError {
    /// Check whether this is one of the routine move rejections
    /// (out-of-range column, full column, game over).
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            EngineError::ColumnOutOfRange { .. }
                | EngineError::ColumnFull { .. }
                | EngineError::GameOver
        )
    }
}
