//! Derived game status.

use serde::{Deserialize, Serialize};

use super::moves::WinningLine;
use super::player::PlayerId;

/// Where the game stands. Derived from the move log; `Won` and `Drawn` are
/// mutually exclusive and both freeze the board until an undo or reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    #[default]
    InProgress,
    /// A player completed a line of four or more.
    Won {
        player: PlayerId,
        line: WinningLine,
    },
    /// The board filled with no winner.
    Drawn,
}

impl GameStatus {
    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning player, if the game was won.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// The winning line, if the game was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Check for a draw.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Drawn)
    }
}
