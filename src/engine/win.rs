//! Line-scan win detection.
//!
//! After a token lands, four axes through the landing cell are scanned in a
//! fixed order: horizontal, vertical, diagonal-\ (down-right), diagonal-/
//! (down-left). Along each axis the contiguous run of same-player cells is
//! counted in both directions from the placed cell. The first axis whose run
//! reaches four reports the win; remaining axes are not examined, so a move
//! completing two lines at once reports only the earlier axis. The reported
//! line is the full contiguous run, not clipped to four.

use crate::core::{Coord, Grid, PlayerId, WinningLine};

/// Minimum run length that wins the game.
pub const WIN_LENGTH: usize = 4;

/// Scan axes in detection order: `(row_step, col_step)`.
const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal \
    (1, -1), // diagonal /
];

/// Find a winning line through `placed`, which must already hold a token of
/// `player`. Returns `None` when no axis reaches [`WIN_LENGTH`].
#[must_use]
pub fn find_winning_line(grid: &Grid, placed: Coord, player: PlayerId) -> Option<WinningLine> {
    AXES.iter()
        .map(|&axis| run_through(grid, placed, player, axis))
        .find(|run| run.len() >= WIN_LENGTH)
        .map(WinningLine::new)
}

/// Collect the maximal contiguous run of `player`'s cells through `placed`
/// along `axis`, ordered from the negative end to the positive end.
fn run_through(grid: &Grid, placed: Coord, player: PlayerId, axis: (isize, isize)) -> Vec<Coord> {
    let mut run = walk(grid, placed, player, (-axis.0, -axis.1));
    run.reverse();
    run.push(placed);
    run.extend(walk(grid, placed, player, axis));
    run
}

/// Cells of `player` strictly beyond `from` in direction `step`, in walk
/// order. Stops at the board edge, an empty cell, or an opponent token.
fn walk(grid: &Grid, from: Coord, player: PlayerId, step: (isize, isize)) -> Vec<Coord> {
    let mut cells = Vec::new();
    let mut row = from.row as isize + step.0;
    let mut col = from.col as isize + step.1;

    while row >= 0
        && col >= 0
        && (row as usize) < grid.rows()
        && (col as usize) < grid.columns()
        && grid.get(row as usize, col as usize).occupant() == Some(player)
    {
        cells.push(Coord::new(row as usize, col as usize));
        row += step.0;
        col += step.1;
    }

    cells
}
