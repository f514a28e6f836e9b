//! Engine error types.

use crate::types::Coord;

/// Error returned by engine operations.
///
/// Playing an occupied cell is not an error: `choose_tile` reports it by
/// returning [`crate::TileState::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Coordinates outside `[0, board_size)`.
    #[display("Coordinate {} is outside a {}x{} board", coord, board_size, board_size)]
    OutOfRange {
        /// The rejected coordinate.
        coord: Coord,
        /// Side length of the board.
        board_size: usize,
    },

    /// Board size outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[display("Board size {} is outside the playable range 3..=1024", _0)]
    InvalidBoardSize(usize),

    /// A saved engine state failed validation.
    #[display("Corrupt snapshot: {}", _0)]
    CorruptSnapshot(String),
}

impl std::error::Error for EngineError {}
