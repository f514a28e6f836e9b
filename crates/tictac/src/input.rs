//! Parsing player input into moves and commands.

use std::str::FromStr;
use tictac_engine::Coord;
use tracing::instrument;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Claim a tile.
    Move(Coord),
    /// Start a new round.
    Reset,
    /// Save the session.
    Save,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(ascii_case_insensitive)]
enum Keyword {
    #[strum(serialize = "reset", serialize = "new", serialize = "r")]
    Reset,
    #[strum(serialize = "save", serialize = "s")]
    Save,
    #[strum(serialize = "help", serialize = "h", serialize = "?")]
    Help,
    #[strum(serialize = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

/// Errors from parsing player input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing was entered.
    #[display("Enter a move or a command (type 'help' for options)")]
    Empty,
    /// The input is neither a coordinate nor a command.
    #[display("Could not understand '{}'", _0)]
    Unrecognized(String),
    /// The coordinate does not fit the board.
    #[display("'{}' is not on a {}x{} board", input, board_size, board_size)]
    OffBoard {
        /// The rejected input.
        input: String,
        /// Side length of the board.
        board_size: usize,
    },
}

impl std::error::Error for InputError {}

/// Parses a line of input into a command.
#[instrument]
pub fn parse_command(input: &str, board_size: usize) -> Result<Command, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    if let Ok(keyword) = Keyword::from_str(trimmed) {
        return Ok(match keyword {
            Keyword::Reset => Command::Reset,
            Keyword::Save => Command::Save,
            Keyword::Help => Command::Help,
            Keyword::Quit => Command::Quit,
        });
    }

    parse_coord(trimmed, board_size).map(Command::Move)
}

/// Parses a board coordinate.
///
/// Accepts a 0-based `row col` pair separated by a space, comma or dash
/// (`"1 2"`, `"1,2"`, `"1-2"`), or a single 1-based cell number as shown on
/// the rendered board.
#[instrument]
pub fn parse_coord(input: &str, board_size: usize) -> Result<Coord, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let off_board = || InputError::OffBoard {
        input: trimmed.to_string(),
        board_size,
    };
    let unrecognized = || InputError::Unrecognized(trimmed.to_string());

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',' || c == '-')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let number: usize = cell.parse().map_err(|_| unrecognized())?;
            number
                .checked_sub(1)
                .and_then(|index| Coord::from_index(index, board_size))
                .ok_or_else(off_board)
        }
        [row, col] => {
            let row: usize = row.parse().map_err(|_| unrecognized())?;
            let col: usize = col.parse().map_err(|_| unrecognized())?;
            let coord = Coord::new(row, col);
            if coord.in_bounds(board_size) {
                Ok(coord)
            } else {
                Err(off_board())
            }
        }
        _ => Err(unrecognized()),
    }
}
