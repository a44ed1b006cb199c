//! Core engine types: players, the grid, move records, game status.
//!
//! These are the data-model building blocks. The grid is always a derived
//! cache of the move log; nothing in this module mutates state on its own.

pub mod grid;
pub mod moves;
pub mod player;
pub mod status;

pub use grid::{Cell, Grid};
pub use moves::{Coord, MoveKind, MoveRecord, WinningLine};
pub use player::PlayerId;
pub use status::GameStatus;
