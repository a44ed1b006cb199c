//! Player identification.
//!
//! Exactly two players, identified as `1` and `2`. The current player is
//! never stored: it is derived from the length of the move log, so player 1
//! always moves when an even number of moves has been played.

use serde::{Deserialize, Serialize};

/// Player identifier for a two-player game.
///
/// Valid values are `PlayerId::ONE` and `PlayerId::TWO`. The raw value is
/// kept 1-based to match the notation used by presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player, who always makes the opening move.
    pub const ONE: PlayerId = PlayerId(1);

    /// The second player.
    pub const TWO: PlayerId = PlayerId(2);

    /// Get the raw player number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::ONE => PlayerId::TWO,
            _ => PlayerId::ONE,
        }
    }

    /// The player to move after `move_count` moves have been played.
    ///
    /// Player 1 moves on even counts, player 2 on odd counts, so move 1
    /// (the first move) is always player 1's.
    #[must_use]
    pub const fn for_turn(move_count: usize) -> PlayerId {
        if move_count % 2 == 0 {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
