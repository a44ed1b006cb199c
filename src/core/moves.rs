//! Move records: the entries of the move log.
//!
//! The move log is the authoritative record of game progress; the grid is a
//! projection of it. Each entry captures where a token landed, whose it was,
//! and whether that move ended the game. Records are immutable once logged,
//! which is what makes history replay and time-travel trustworthy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// A board coordinate. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// How a move left the game: still running, won it, or drew it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// The game continues after this move.
    #[default]
    Ongoing,
    /// This move completed a winning line for its player.
    Win,
    /// This move filled the board with no winner.
    Draw,
}

/// An ordered run of at least four same-player cells along one axis.
///
/// Cells run from the negative end of the axis to the positive end and
/// always include the most recently placed token. The run is maximal: a
/// five-in-a-row reports all five cells, not a clipped four.
///
/// `SmallVec` keeps the common 4-cell case off the heap; runs can reach the
/// longer board dimension on oversized lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    cells: SmallVec<[Coord; 8]>,
}

impl WinningLine {
    /// Build a line from ordered cells.
    #[must_use]
    pub fn new(cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// The cells of the run, in axis order.
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells in the run (always >= 4 for engine-produced lines).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for a manually constructed empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether the run passes through a coordinate.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// A single entry of the move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Row the token landed in.
    pub row: usize,

    /// Column the token was dropped into.
    pub column: usize,

    /// The player who made the move.
    pub player: PlayerId,

    /// Whether this move ended the game.
    pub kind: MoveKind,

    /// The completed line when `kind` is `Win`; `None` otherwise.
    pub winning_line: Option<WinningLine>,
}

impl MoveRecord {
    /// Create an ordinary (non-terminal) move record.
    #[must_use]
    pub fn new(row: usize, column: usize, player: PlayerId) -> Self {
        Self {
            row,
            column,
            player,
            kind: MoveKind::Ongoing,
            winning_line: None,
        }
    }

    /// The coordinate the token landed on.
    #[must_use]
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.column)
    }

    /// Check whether this move ended the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind != MoveKind::Ongoing
    }
}
