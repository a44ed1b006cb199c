//! Engine lifecycle events.
//!
//! The engine notifies subscribers of five kinds of event. Payloads carry
//! full move records so a presentation layer can render a move, highlight a
//! winning line, or un-highlight one on undo without querying the engine
//! from inside a handler.

use serde::{Deserialize, Serialize};

use crate::core::MoveRecord;

/// The subscription key: which engine event a handler wants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A move was accepted and applied.
    Move,
    /// A move ended the game with a win (fires after `Move`).
    Win,
    /// A move filled the board with no winner (fires after `Move`).
    Draw,
    /// The last move was undone.
    Undo,
    /// Grid and log were cleared to the initial state.
    Reset,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::Move => "move",
            EventKind::Win => "win",
            EventKind::Draw => "draw",
            EventKind::Undo => "undo",
            EventKind::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// An event as delivered to handlers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// The applied move. For a winning move, `winning_line` is populated.
    Move(MoveRecord),
    /// The winning move, `winning_line` populated.
    Win(MoveRecord),
    /// Game over with a full board; the triggering move carries no line.
    Draw,
    /// The removed move, including its former winning line if it had one.
    Undo(MoveRecord),
    /// The engine returned to an empty board.
    Reset,
}

impl EngineEvent {
    /// The kind this event dispatches under.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            EngineEvent::Move(_) => EventKind::Move,
            EngineEvent::Win(_) => EventKind::Win,
            EngineEvent::Draw => EventKind::Draw,
            EngineEvent::Undo(_) => EventKind::Undo,
            EngineEvent::Reset => EventKind::Reset,
        }
    }

    /// The move record carried by this event, if any.
    #[must_use]
    pub fn record(&self) -> Option<&MoveRecord> {
        match self {
            EngineEvent::Move(record) | EngineEvent::Win(record) | EngineEvent::Undo(record) => {
                Some(record)
            }
            EngineEvent::Draw | EngineEvent::Reset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_event_kinds() {
        let record = MoveRecord::new(5, 3, PlayerId::ONE);

        assert_eq!(EngineEvent::Move(record.clone()).kind(), EventKind::Move);
        assert_eq!(EngineEvent::Win(record.clone()).kind(), EventKind::Win);
        assert_eq!(EngineEvent::Draw.kind(), EventKind::Draw);
        assert_eq!(EngineEvent::Undo(record).kind(), EventKind::Undo);
        assert_eq!(EngineEvent::Reset.kind(), EventKind::Reset);
    }

    #[test]
    fn test_record_accessor() {
        let record = MoveRecord::new(4, 2, PlayerId::TWO);

        assert_eq!(
            EngineEvent::Move(record.clone()).record(),
            Some(&record)
        );
        assert_eq!(EngineEvent::Draw.record(), None);
        assert_eq!(EngineEvent::Reset.record(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", EventKind::Win), "win");
        assert_eq!(format!("{}", EventKind::Undo), "undo");
    }

    #[test]
    fn test_event_serialization() {
        let event = EngineEvent::Move(MoveRecord::new(5, 0, PlayerId::ONE));
        let json = serde_json::to_string(&event).unwrap();
        let back: EngineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
