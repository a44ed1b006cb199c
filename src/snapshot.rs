//! Snapshots for a persistence sink.
//!
//! A snapshot stores `{rows, columns, moves}` only. The grid and status are
//! not serialized: they are always reconstructible by replaying the log,
//! which keeps saves compact and doubles as a consistency check. Restore
//! replays every stored move through the real move path and cross-checks
//! each replayed record against the stored one; any divergence means the
//! save is corrupt and restore fails hard rather than accepting an
//! inconsistent state.
//!
//! The engine does not manage the storage medium. Callers get serde types
//! plus [`Snapshot::to_bytes`]/[`Snapshot::from_bytes`] for a compact
//! binary encoding.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::MoveRecord;
use crate::engine::GameEngine;
use crate::error::EngineError;

/// Serialized engine state: dimensions plus the full move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    rows: usize,
    columns: usize,
    moves: Vec<MoveRecord>,
}

impl Snapshot {
    /// Capture the engine's current state.
    #[must_use]
    pub fn capture(engine: &GameEngine) -> Self {
        Self {
            rows: engine.rows(),
            columns: engine.columns(),
            moves: engine.move_history().iter().cloned().collect(),
        }
    }

    /// Number of rows in the captured board.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the captured board.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The captured move log.
    #[must_use]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Rebuild an engine by replaying the stored log from an empty board.
    ///
    /// Every replayed move must be accepted and must reproduce its stored
    /// record exactly: landing row, player, result kind, and winning line.
    /// Any mismatch fails with [`EngineError::CorruptState`]; a snapshot is
    /// never partially restored.
    pub fn restore(&self) -> Result<GameEngine, EngineError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(EngineError::CorruptState(format!(
                "invalid dimensions {}x{}",
                self.rows, self.columns
            )));
        }

        let mut engine = GameEngine::new(self.rows, self.columns);

        for (index, stored) in self.moves.iter().enumerate() {
            let replayed = engine.make_move(stored.column).map_err(|err| {
                EngineError::CorruptState(format!("move {index} rejected on replay: {err}"))
            })?;

            if replayed != *stored {
                return Err(EngineError::CorruptState(format!(
                    "move {index} diverged on replay: stored {stored:?}, replayed {replayed:?}"
                )));
            }
        }

        debug!(moves = self.moves.len(), "snapshot restored");
        Ok(engine)
    }

    /// Encode to a compact binary representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a binary snapshot. Undecodable bytes are a corrupt save.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes)
            .map_err(|err| EngineError::CorruptState(format!("undecodable snapshot: {err}")))
    }
}
