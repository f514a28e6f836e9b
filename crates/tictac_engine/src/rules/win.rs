//! Win detection.

use super::Line;
use crate::board::Board;
use crate::types::{Coord, Player};
use tracing::instrument;

/// Counts the cells on `line` owned by `player`.
pub fn owned_count(board: &Board, line: Line, player: Player) -> usize {
    let mark = player.mark();
    line.cells(board.size())
        .filter(|coord| board.get(*coord) == Some(mark))
        .count()
}

/// Checks whether `player` owns a full line after moving at `coord`.
///
/// Looks at the row and column through `coord` and at both board-wide
/// diagonals, whether or not `coord` lies on them.
#[instrument(skip(board), fields(board_size = board.size()))]
pub fn completed_line(board: &Board, player: Player, coord: Coord) -> Option<Line> {
    let n = board.size();
    Line::through(coord)
        .into_iter()
        .find(|line| owned_count(board, *line, player) == n)
}

/// Scans every line for a winner.
#[instrument(skip(board), fields(board_size = board.size()))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    let n = board.size();
    Line::all(n).find_map(|line| {
        let first = board.get(line.cells(n).next()?)?.owner()?;
        (owned_count(board, line, first) == n).then_some((first, line))
    })
}
