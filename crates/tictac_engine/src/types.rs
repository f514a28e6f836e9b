//! Core domain types for the tictac engine.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// Player one (moves first, plays `X`).
    #[display("Player One")]
    One,
    /// Player two (plays `O`).
    #[display("Player Two")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the tile mark this player leaves on the board.
    pub fn mark(self) -> TileState {
        match self {
            Player::One => TileState::PlayerOne,
            Player::Two => TileState::PlayerTwo,
        }
    }

    /// Returns the win state credited to this player.
    pub fn win_state(self) -> GameState {
        match self {
            Player::One => GameState::PlayerOneWin,
            Player::Two => GameState::PlayerTwoWin,
        }
    }
}

/// State of a single cell.
///
/// `Invalid` is only ever returned from [`crate::GameEngine::choose_tile`]
/// to signal a rejected move; it is never stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Unclaimed cell.
    Blank,
    /// Cell claimed by player one.
    PlayerOne,
    /// Cell claimed by player two.
    PlayerTwo,
    /// Sentinel for a rejected move.
    Invalid,
}

impl TileState {
    /// Returns the player owning this tile, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            TileState::PlayerOne => Some(Player::One),
            TileState::PlayerTwo => Some(Player::Two),
            TileState::Blank | TileState::Invalid => None,
        }
    }

    /// True for an unclaimed cell.
    pub fn is_blank(self) -> bool {
        self == TileState::Blank
    }
}

/// Classification of the current round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameState {
    /// No win or draw detected yet.
    #[default]
    #[display("In progress.")]
    InProgress,
    /// Player one completed a line.
    #[display("Player One won.")]
    PlayerOneWin,
    /// Player two completed a line.
    #[display("Player Two won.")]
    PlayerTwoWin,
    /// The board filled up without a completed line.
    #[display("Draw.")]
    Draw,
}

impl GameState {
    /// True once the round has ended.
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }

    /// Returns the winner, if the round ended in a win.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::PlayerOneWin => Some(Player::One),
            GameState::PlayerTwoWin => Some(Player::Two),
            GameState::InProgress | GameState::Draw => None,
        }
    }
}

/// A cell coordinate on the board (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}-{}", row, col)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps a row-major flat position to a coordinate.
    ///
    /// Returns `None` when the position lies outside an N×N grid.
    #[instrument]
    pub fn from_index(index: usize, board_size: usize) -> Option<Self> {
        let past_end = board_size
            .checked_mul(board_size)
            .is_some_and(|total| index >= total);
        if board_size == 0 || past_end {
            return None;
        }
        Some(Self::new(index / board_size, index % board_size))
    }

    /// Row-major flat position of this coordinate.
    pub fn to_index(self, board_size: usize) -> usize {
        self.row * board_size + self.col
    }

    /// True if both components lie in `[0, board_size)`.
    pub fn in_bounds(self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }
}

/// Cumulative win counters across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display)]
#[display("{} - {}", player_one, player_two)]
pub struct Wins {
    /// Rounds won by player one.
    pub player_one: u32,
    /// Rounds won by player two.
    pub player_two: u32,
}

impl Wins {
    /// Returns the win count for a player.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub(crate) fn record(&mut self, player: Player) {
        match player {
            Player::One => self.player_one += 1,
            Player::Two => self.player_two += 1,
        }
    }
}
