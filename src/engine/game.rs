//! The game-state engine.
//!
//! `GameEngine` owns the grid, the move log, the derived status, and the
//! listener registry. The move log is the single source of truth for game
//! progress; the grid is a cached projection of it, and every operation
//! keeps the two consistent. All mutable fields are private, so the
//! invariants can only be reached through the operations here.
//!
//! All operations are synchronous, complete in O(board size) or better, and
//! return failure values rather than panicking for routine rejections.

use im::Vector;
use tracing::debug;

use crate::core::{Cell, GameStatus, Grid, MoveKind, MoveRecord, PlayerId};
use crate::error::EngineError;
use crate::events::{EngineEvent, EventKind, Handler, ListenerId, ListenerRegistry};

use super::win::find_winning_line;

/// A two-player connection game on a fixed `rows x columns` board.
///
/// ## Example
///
/// ```
/// use connect4_engine::{GameEngine, MoveKind, PlayerId};
///
/// let mut engine = GameEngine::new(6, 7);
/// let record = engine.make_move(3).unwrap();
///
/// assert_eq!(record.row, 5); // tokens fall to the bottom row
/// assert_eq!(record.player, PlayerId::ONE);
/// assert_eq!(record.kind, MoveKind::Ongoing);
/// assert_eq!(engine.current_player(), PlayerId::TWO);
/// ```
#[derive(Debug)]
pub struct GameEngine {
    grid: Grid,
    log: Vector<MoveRecord>,
    status: GameStatus,
    listeners: ListenerRegistry,
}

impl GameEngine {
    /// Create an engine with an all-empty grid and an empty move log.
    ///
    /// Both dimensions must be at least 1. The product-level 4-10 range is
    /// a caller concern; the engine works on any positive board.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            grid: Grid::new(rows, columns),
            log: Vector::new(),
            status: GameStatus::InProgress,
            listeners: ListenerRegistry::new(),
        }
    }

    // === Dimensions ===

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    // === Turn and status queries ===

    /// The player to move: player 1 on even log lengths, player 2 on odd.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::for_turn(self.log.len())
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// The winner, if the game was won.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    /// Check for a draw.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.status.is_draw()
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    // === Board queries ===

    /// A deep copy of the current grid. The engine never hands out mutable
    /// aliases into its own state.
    #[must_use]
    pub fn board(&self) -> Grid {
        self.grid.clone()
    }

    /// Check whether a move in `column` would currently be accepted.
    #[must_use]
    pub fn is_valid_move(&self, column: usize) -> bool {
        !self.status.is_over()
            && self.grid.column_in_range(column)
            && !self.grid.is_column_full(column)
    }

    /// Check whether a column is full (out-of-range columns report full).
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        self.grid.is_column_full(column)
    }

    /// The row a token dropped in `column` would land in, or `None` if the
    /// column is full or out of range.
    #[must_use]
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        self.grid.lowest_empty_row(column)
    }

    // === History queries ===

    /// A copy of the move log. O(1) thanks to the persistent vector.
    #[must_use]
    pub fn move_history(&self) -> Vector<MoveRecord> {
        self.log.clone()
    }

    /// Number of moves played.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.log.len()
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.log.last()
    }

    // === Moves ===

    /// Drop the current player's token into `column`.
    ///
    /// Rejects (without touching any state) when the game is over, the
    /// column is out of range, or the column is full. On acceptance the
    /// token lands in the lowest empty row, the move is appended to the
    /// log, and the win/draw checks run from the landing cell.
    ///
    /// Dispatches `move` to subscribers, then `win` or `draw` if the move
    /// ended the game.
    pub fn make_move(&mut self, column: usize) -> Result<MoveRecord, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }
        if !self.grid.column_in_range(column) {
            return Err(EngineError::ColumnOutOfRange {
                column,
                columns: self.grid.columns(),
            });
        }
        let row = self
            .grid
            .lowest_empty_row(column)
            .ok_or(EngineError::ColumnFull { column })?;

        let player = self.current_player();
        self.grid.set(row, column, Cell::Occupied(player));

        let mut record = MoveRecord::new(row, column, player);

        if let Some(line) = find_winning_line(&self.grid, record.coord(), player) {
            record.kind = MoveKind::Win;
            record.winning_line = Some(line.clone());
            self.status = GameStatus::Won { player, line };
        } else if self.log.len() + 1 == self.grid.rows() * self.grid.columns() {
            record.kind = MoveKind::Draw;
            self.status = GameStatus::Drawn;
        }

        self.log.push_back(record.clone());
        debug!(%player, column, row, kind = ?record.kind, "move applied");

        self.listeners.emit(&EngineEvent::Move(record.clone()));
        match record.kind {
            MoveKind::Win => self.listeners.emit(&EngineEvent::Win(record.clone())),
            MoveKind::Draw => self.listeners.emit(&EngineEvent::Draw),
            MoveKind::Ongoing => {}
        }

        Ok(record)
    }

    /// Undo the most recent move.
    ///
    /// Removes the last log entry, empties its cell, and unconditionally
    /// returns the status to `InProgress`: undoing a winning or drawing
    /// move un-ends the game. Dispatches `undo` with the removed record,
    /// former winning line included, so subscribers can un-highlight.
    pub fn undo_move(&mut self) -> Result<MoveRecord, EngineError> {
        let record = self.log.last().cloned().ok_or(EngineError::EmptyHistory)?;

        self.log.pop_back();
        self.grid.set(record.row, record.column, Cell::Empty);
        self.status = GameStatus::InProgress;
        debug!(player = %record.player, column = record.column, "move undone");

        self.listeners.emit(&EngineEvent::Undo(record.clone()));
        Ok(record)
    }

    /// Clear the grid and log back to the initial state, keeping
    /// dimensions. Dispatches `reset`.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.log.clear();
        self.status = GameStatus::InProgress;
        debug!("engine reset");

        self.listeners.emit(&EngineEvent::Reset);
    }

    // === History navigation ===

    /// Time-travel: rewind the live game to the state just after
    /// `moves[index]` was played.
    ///
    /// The grid is rebuilt from scratch by replaying `moves[0..=index]` and
    /// the log is truncated to that prefix. The status is taken from the
    /// stored result of `moves[index]` as-is; detection is not re-run,
    /// the logged result is authoritative.
    ///
    /// Rejects indices outside the log and the current last index (a
    /// no-op rewind). Returns a copy of the rebuilt grid.
    pub fn reset_to_move(&mut self, index: usize) -> Result<Grid, EngineError> {
        if index >= self.log.len() || index + 1 == self.log.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.log.len(),
            });
        }

        self.grid = self.replay_prefix(index);
        self.log.truncate(index + 1);
        self.status = Self::status_of(&self.log[index]);
        debug!(index, "rewound to logged move");

        Ok(self.grid.clone())
    }

    /// Non-mutating preview of the board as it stood just after
    /// `moves[index]` was played. The live grid, log, and status are
    /// untouched; the returned grid is a disposable snapshot.
    pub fn board_at_move(&self, index: usize) -> Result<Grid, EngineError> {
        if index >= self.log.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.log.len(),
            });
        }
        Ok(self.replay_prefix(index))
    }

    /// Rebuild a grid by replaying `moves[0..=index]` from empty. Logged
    /// records carry their landing cells, so replay is a direct projection.
    fn replay_prefix(&self, index: usize) -> Grid {
        let mut grid = Grid::new(self.grid.rows(), self.grid.columns());
        for record in self.log.iter().take(index + 1) {
            grid.set(record.row, record.column, Cell::Occupied(record.player));
        }
        grid
    }

    /// The status implied by a logged move's stored result.
    fn status_of(record: &MoveRecord) -> GameStatus {
        match record.kind {
            MoveKind::Ongoing => GameStatus::InProgress,
            MoveKind::Draw => GameStatus::Drawn,
            MoveKind::Win => GameStatus::Won {
                player: record.player,
                line: record.winning_line.clone().unwrap_or_default(),
            },
        }
    }

    // === Events ===

    /// Subscribe a handler to an event kind. Handlers fire synchronously,
    /// in registration order, during the operation that triggers them.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) -> ListenerId {
        self.listeners.subscribe(kind, handler)
    }

    /// Remove a previously subscribed handler.
    pub fn unsubscribe(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.listeners.unsubscribe(kind, id)
    }
}
