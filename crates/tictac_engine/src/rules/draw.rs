//! Draw detection.

use crate::board::Board;

/// Checks if the board is full (all tiles claimed).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == board.size() * board.size()
}
