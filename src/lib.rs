//! # connect4-engine
//!
//! Rules engine for a two-player connection game on a configurable
//! rectangular grid. This crate is the game-state core only: move
//! application with gravity semantics, win/draw detection, undo, history
//! time-travel, snapshots for persistence, and the event contract that
//! presentation layers consume. Rendering, input handling, and storage
//! media live outside this crate.
//!
//! ## Design
//!
//! - **The move log is the source of truth.** The grid is a derived cache
//!   of the log and the two never diverge; any prior board state can be
//!   rebuilt by replaying a log prefix.
//! - **Encapsulated state.** All mutable fields are private; queries hand
//!   out copies, never mutable aliases into engine-owned state.
//! - **Failure values, not exceptions.** Full columns and finished games
//!   are routine outcomes returned as [`EngineError`] values.
//! - **Single-threaded.** Operations are synchronous and atomic with
//!   respect to each other; embedding in a concurrent context requires
//!   external serialization.
//!
//! ## Modules
//!
//! - `core`: players, the grid, move records, game status
//! - `engine`: the [`GameEngine`] and line-scan win detection
//! - `events`: subscribe/unsubscribe registry and event payloads
//! - `snapshot`: compact replay-from-log serialization
//! - `error`: the failure taxonomy
//!
//! ## Example
//!
//! ```
//! use connect4_engine::{GameEngine, GameStatus, PlayerId};
//!
//! let mut engine = GameEngine::new(6, 7);
//!
//! // Player 1 builds a horizontal four on the bottom row while player 2
//! // stacks elsewhere.
//! for column in [0, 6, 1, 6, 2, 6] {
//!     engine.make_move(column).unwrap();
//! }
//! let winning = engine.make_move(3).unwrap();
//!
//! assert_eq!(engine.winner(), Some(PlayerId::ONE));
//! assert_eq!(winning.winning_line.unwrap().len(), 4);
//!
//! // Undo un-ends the game.
//! engine.undo_move().unwrap();
//! assert_eq!(*engine.status(), GameStatus::InProgress);
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod events;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{Cell, Coord, GameStatus, Grid, MoveKind, MoveRecord, PlayerId, WinningLine};

pub use crate::engine::{find_winning_line, GameEngine, WIN_LENGTH};

pub use crate::error::EngineError;

pub use crate::events::{EngineEvent, EventKind, Handler, ListenerId, ListenerRegistry};

pub use crate::snapshot::Snapshot;
