//! Rules for tic-tac-toe on an N×N board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, completed_line, owned_count};

use crate::types::Coord;
use serde::{Deserialize, Serialize};

/// A group of `N` cells that wins the round when one player owns all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// A full row.
    Row(usize),
    /// A full column.
    Column(usize),
    /// The main diagonal, `(i, i)`.
    Diagonal,
    /// The anti-diagonal, `(i, N-1-i)`.
    AntiDiagonal,
}

impl Line {
    /// Coordinates covered by this line on a board of the given size.
    pub fn cells(self, board_size: usize) -> impl Iterator<Item = Coord> {
        (0..board_size).map(move |i| match self {
            Line::Row(row) => Coord::new(row, i),
            Line::Column(col) => Coord::new(i, col),
            Line::Diagonal => Coord::new(i, i),
            Line::AntiDiagonal => Coord::new(i, board_size - 1 - i),
        })
    }

    /// The lines checked after a move at `coord`: its row, its column and
    /// both board diagonals.
    pub fn through(coord: Coord) -> [Line; 4] {
        [
            Line::Row(coord.row),
            Line::Column(coord.col),
            Line::Diagonal,
            Line::AntiDiagonal,
        ]
    }

    /// Every line on a board of the given size.
    pub fn all(board_size: usize) -> impl Iterator<Item = Line> {
        (0..board_size)
            .map(Line::Row)
            .chain((0..board_size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// True if the coordinate lies on this line.
    pub fn contains(self, coord: Coord, board_size: usize) -> bool {
        match self {
            Line::Row(row) => coord.row == row,
            Line::Column(col) => coord.col == col,
            Line::Diagonal => coord.row == coord.col,
            Line::AntiDiagonal => coord.row + coord.col + 1 == board_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anti_diagonal_cells() {
        let cells: Vec<_> = Line::AntiDiagonal.cells(3).collect();
        assert_eq!(
            cells,
            vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_all_lines_count() {
        assert_eq!(Line::all(3).count(), 8);
        assert_eq!(Line::all(5).count(), 12);
    }

    #[test]
    fn test_contains() {
        assert!(Line::AntiDiagonal.contains(Coord::new(3, 0), 4));
        assert!(!Line::AntiDiagonal.contains(Coord::new(0, 0), 4));
        assert!(Line::Column(2).contains(Coord::new(1, 2), 4));
    }
}
