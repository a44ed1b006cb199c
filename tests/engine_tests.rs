//! End-to-end engine scenarios on the standard 6x7 board (and a 4x4 board
//! for the draw case), exercised through the public API.

use connect4_engine::{
    Coord, EngineError, GameEngine, GameStatus, MoveKind, PlayerId, Snapshot,
};

/// First move on an empty board lands on the bottom row.
#[test]
fn test_opening_move_lands_on_bottom_row() {
    let mut engine = GameEngine::new(6, 7);

    let record = engine.make_move(3).unwrap();

    assert_eq!(record.row, 5);
    assert_eq!(record.column, 3);
    assert_eq!(record.player, PlayerId::ONE);
    assert_eq!(record.kind, MoveKind::Ongoing);
}

/// Stacking one column with alternating players builds upward without a win.
#[test]
fn test_mixed_stack_in_one_column() {
    let mut engine = GameEngine::new(6, 7);

    for expected_row in [5, 4, 3] {
        let record = engine.make_move(3).unwrap();
        assert_eq!(record.row, expected_row);
    }
    let fourth = engine.make_move(3).unwrap();

    assert_eq!(fourth.row, 2);
    assert_eq!(fourth.column, 3);
    assert_eq!(fourth.kind, MoveKind::Ongoing);
    assert_eq!(*engine.status(), GameStatus::InProgress);
}

/// Player 1 lines up columns 0..=3 on the bottom row while player 2 stacks
/// in column 6; the fourth bottom-row token wins.
#[test]
fn test_horizontal_win_on_bottom_row() {
    let mut engine = GameEngine::new(6, 7);

    for column in [0, 6, 1, 6, 2, 6] {
        engine.make_move(column).unwrap();
    }
    let winning = engine.make_move(3).unwrap();

    assert_eq!(winning.kind, MoveKind::Win);
    assert_eq!(engine.winner(), Some(PlayerId::ONE));

    let line = winning.winning_line.as_ref().unwrap();
    assert_eq!(
        line.cells(),
        &[
            Coord::new(5, 0),
            Coord::new(5, 1),
            Coord::new(5, 2),
            Coord::new(5, 3)
        ]
    );
}

/// Column order that fills a 4x4 board without ever forming a line of four.
/// Columns 0 and 2 fill first with strictly alternating owners, then
/// columns 1 and 3; the resulting rows read 1122 / 2211 / 1122 / 2211.
const DRAW_FILL_4X4: [usize; 16] = [0, 2, 2, 0, 0, 2, 2, 0, 1, 3, 3, 1, 1, 3, 3, 1];

/// Filling the last cell of the board without a line yields a draw, and the
/// status stays in-progress until that exact move.
#[test]
fn test_draw_on_exactly_full_board() {
    let mut engine = GameEngine::new(4, 4);

    for &column in &DRAW_FILL_4X4[..15] {
        let record = engine.make_move(column).unwrap();
        assert_eq!(record.kind, MoveKind::Ongoing);
        assert_eq!(*engine.status(), GameStatus::InProgress);
    }

    let last = engine.make_move(DRAW_FILL_4X4[15]).unwrap();

    assert_eq!(last.kind, MoveKind::Draw);
    assert!(last.winning_line.is_none());
    assert_eq!(*engine.status(), GameStatus::Drawn);
    assert!(engine.is_draw());
    assert_eq!(engine.make_move(0), Err(EngineError::GameOver));
}

/// Undoing a winning move re-opens the game: the cell empties, the status
/// returns to in-progress, and the winner moves again.
#[test]
fn test_undo_after_win_reopens_game() {
    let mut engine = GameEngine::new(6, 7);
    for column in [0, 6, 1, 6, 2, 6] {
        engine.make_move(column).unwrap();
    }
    engine.make_move(3).unwrap();
    assert!(engine.is_over());

    let undone = engine.undo_move().unwrap();

    assert_eq!(undone.kind, MoveKind::Win);
    assert!(undone.winning_line.is_some());
    assert_eq!(*engine.status(), GameStatus::InProgress);
    assert!(engine.board().get(5, 3).is_empty());
    assert_eq!(engine.current_player(), PlayerId::ONE);
}

/// Historical previews replay a log prefix without touching the live game.
#[test]
fn test_preview_of_historical_board() {
    let mut engine = GameEngine::new(6, 7);
    for column in [0, 1, 0, 1, 2, 3, 2, 3, 4, 5] {
        engine.make_move(column).unwrap();
    }
    assert_eq!(engine.move_count(), 10);

    let preview = engine.board_at_move(4).unwrap();

    // After move index 4 exactly five tokens are on the board.
    let placed = preview.iter().filter(|(_, _, cell)| !cell.is_empty()).count();
    assert_eq!(placed, 5);
    assert_eq!(preview.get(5, 2).occupant(), Some(PlayerId::ONE));
    assert!(preview.get(5, 3).is_empty());

    // The live engine is unchanged.
    assert_eq!(engine.move_count(), 10);
    assert_eq!(engine.board_at_move(4).unwrap(), preview);
}

/// Turn alternation holds over a full game without undos.
#[test]
fn test_turn_alternation() {
    let mut engine = GameEngine::new(6, 7);

    for i in 0..12 {
        let expected = if i % 2 == 0 { PlayerId::ONE } else { PlayerId::TWO };
        assert_eq!(engine.current_player(), expected);
        engine.make_move(i % 7).unwrap();
    }
}

/// A diagonal win is detected even when the completing token lands in the
/// middle of the line rather than at an end.
#[test]
fn test_diagonal_win_completed_in_the_middle() {
    let mut engine = GameEngine::new(6, 7);

    // Player 1 assembles the / diagonal (5,0), (3,2), (2,3) and finally
    // (4,1); player 2's replies land on supporting cells and a column-6
    // stack that never reaches four.
    for column in [0, 1, 2, 2, 3, 3, 3, 6, 2, 6, 3, 6] {
        let record = engine.make_move(column).unwrap();
        assert_eq!(record.kind, MoveKind::Ongoing);
    }
    let record = engine.make_move(1).unwrap();

    assert_eq!(record.coord(), Coord::new(4, 1));
    assert_eq!(record.kind, MoveKind::Win);
    assert_eq!(engine.winner(), Some(PlayerId::ONE));

    let line = record.winning_line.unwrap();
    assert_eq!(
        line.cells(),
        &[
            Coord::new(2, 3),
            Coord::new(3, 2),
            Coord::new(4, 1),
            Coord::new(5, 0)
        ]
    );
}

/// Serialize/deserialize round-trips the complete engine state.
#[test]
fn test_snapshot_round_trip_through_bytes() {
    let mut engine = GameEngine::new(6, 7);
    for column in [3, 2, 3, 4, 0, 1] {
        engine.make_move(column).unwrap();
    }

    let bytes = Snapshot::capture(&engine).to_bytes().unwrap();
    let restored = Snapshot::from_bytes(&bytes).unwrap().restore().unwrap();

    assert_eq!(restored.board(), engine.board());
    assert_eq!(restored.move_history(), engine.move_history());
    assert_eq!(restored.status(), engine.status());
}
