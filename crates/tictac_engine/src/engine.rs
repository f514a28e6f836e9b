//! The game engine: board state, turn order, move legality and classification.

use crate::board::Board;
use crate::error::EngineError;
use crate::rules::{self, Line};
use crate::snapshot::EngineSnapshot;
use crate::types::{Coord, GameState, Player, TileState, Wins};
use crate::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of running a full move through [`GameEngine::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The player who attempted the move.
    pub mover: Player,
    /// Where the move was attempted.
    pub coord: Coord,
    /// The mark placed, or `Invalid` if the move was rejected.
    pub tile: TileState,
    /// Classification after the move.
    pub state: GameState,
}

impl MoveOutcome {
    /// True if a mark was placed.
    pub fn accepted(&self) -> bool {
        self.tile != TileState::Invalid
    }
}

/// Tic-tac-toe engine for an N×N board.
///
/// A move is the sequence [`choose_tile`](Self::choose_tile) →
/// [`classify_state`](Self::classify_state) → [`advance_turn`](Self::advance_turn)
/// (the last only while the round is still in progress).
/// [`play`](Self::play) runs that sequence in one call.
///
/// The engine is not internally synchronized; hosts sharing one across
/// threads must hold a lock for the full move sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EngineSnapshot", try_from = "EngineSnapshot")]
pub struct GameEngine {
    board_size: usize,
    board: Board,
    moves_played: usize,
    active_player: Player,
    state: GameState,
    wins: Wins,
    winning_line: Option<Line>,
}

impl GameEngine {
    /// Creates an engine with an all-blank board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] if `board_size` is below 3
    /// or above [`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(board_size: usize) -> Result<Self, EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            warn!(board_size, "Rejecting board outside playable range");
            return Err(EngineError::InvalidBoardSize(board_size));
        }
        debug!("Creating engine");
        Ok(Self {
            board_size,
            board: Board::new(board_size),
            moves_played: 0,
            active_player: Player::One,
            state: GameState::InProgress,
            wins: Wins::default(),
            winning_line: None,
        })
    }

    /// Claims the tile at `(row, col)` for the active player.
    ///
    /// Returns the placed mark, or [`TileState::Invalid`] (with no state
    /// change) if the tile is already claimed or the round is over. Does not
    /// advance the turn or reclassify the round.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] for coordinates off the board.
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn choose_tile(&mut self, row: usize, col: usize) -> Result<TileState, EngineError> {
        let coord = self.checked(row, col)?;

        if self.state.is_terminal() {
            warn!(state = ?self.state, "Move attempted after round ended");
            return Ok(TileState::Invalid);
        }

        if !self.board.is_blank(coord) {
            debug!("Tile already claimed");
            return Ok(TileState::Invalid);
        }

        let mark = self.active_player.mark();
        self.board.set(coord, mark);
        self.moves_played += 1;
        debug!(moves_played = self.moves_played, "Tile claimed");
        Ok(mark)
    }

    /// Classifies the round after the active player's move at `(row, col)`.
    ///
    /// Must follow a successful [`choose_tile`](Self::choose_tile) at the
    /// same coordinate, before the turn is advanced. A completed row, column
    /// or board diagonal wins and bumps the mover's win counter once; a full
    /// board otherwise is a draw.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] for coordinates off the board.
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn classify_state(&mut self, row: usize, col: usize) -> Result<GameState, EngineError> {
        let coord = self.checked(row, col)?;
        let mover = self.active_player;

        debug_assert_eq!(
            self.board.get(coord),
            Some(mover.mark()),
            "classify_state called for a tile the mover does not own"
        );

        // Already classified this round; never count a win twice.
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        if let Some(line) = rules::completed_line(&self.board, mover, coord) {
            self.state = mover.win_state();
            self.wins.record(mover);
            self.winning_line = Some(line);
            info!(?line, wins = %self.wins, "Round won");
        } else if self.moves_played == self.board.cells().len() {
            self.state = GameState::Draw;
            info!("Round drawn");
        } else {
            self.state = GameState::InProgress;
        }

        #[cfg(debug_assertions)]
        self.debug_check_invariants();

        Ok(self.state)
    }

    /// Passes the turn to the other player.
    ///
    /// Only valid while the round is in progress; after a win or draw the
    /// board must be reset instead. Debug builds panic on misuse, release
    /// builds ignore the call.
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn advance_turn(&mut self) {
        debug_assert!(
            !self.state.is_terminal(),
            "advance_turn called after the round ended"
        );
        if self.state.is_terminal() {
            warn!(state = ?self.state, "Ignoring turn advance after round ended");
            return;
        }
        self.active_player = self.active_player.opponent();
    }

    /// Runs a complete move: claim, classify, and advance if still in progress.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] for coordinates off the board.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome, EngineError> {
        let mover = self.active_player;
        let coord = Coord::new(row, col);

        let tile = self.choose_tile(row, col)?;
        if tile == TileState::Invalid {
            return Ok(MoveOutcome {
                mover,
                coord,
                tile,
                state: self.state,
            });
        }

        let state = self.classify_state(row, col)?;
        if !state.is_terminal() {
            self.advance_turn();
        }

        Ok(MoveOutcome {
            mover,
            coord,
            tile,
            state,
        })
    }

    /// Starts a new round, keeping the board size and win counters.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board.clear();
        self.moves_played = 0;
        self.state = GameState::InProgress;
        self.active_player = Player::One;
        self.winning_line = None;
        debug!("Board reset");
    }

    /// Returns the tile at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] for coordinates off the board.
    pub fn tile(&self, row: usize, col: usize) -> Result<TileState, EngineError> {
        let coord = self.checked(row, col)?;
        Ok(self.board.get(coord).unwrap_or(TileState::Invalid))
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current round classification.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Player whose turn it is (or who made the final move of a finished round).
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Moves applied in the current round.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Win counters across rounds.
    pub fn wins(&self) -> Wins {
        self.wins
    }

    /// The line the winner completed, if the round ended in a win.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Blank tiles in row-major order.
    pub fn available_tiles(&self) -> Vec<Coord> {
        (0..self.board.cells().len())
            .filter_map(|index| Coord::from_index(index, self.board_size))
            .filter(|coord| self.board.is_blank(*coord))
            .collect()
    }

    fn checked(&self, row: usize, col: usize) -> Result<Coord, EngineError> {
        let coord = Coord::new(row, col);
        if coord.in_bounds(self.board_size) {
            Ok(coord)
        } else {
            warn!(%coord, board_size = self.board_size, "Coordinate out of range");
            Err(EngineError::OutOfRange {
                coord,
                board_size: self.board_size,
            })
        }
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        use crate::invariants::{
            BoardDimensions, InvariantSet, MoveCounterConsistent, NoStoredInvalid,
        };
        type Structural = (BoardDimensions, NoStoredInvalid, MoveCounterConsistent);
        if let Err(violations) = Structural::check_all(self) {
            panic!("Engine invariants violated: {:?}", violations);
        }
    }

    /// Builds an engine from a snapshot without checking game invariants.
    ///
    /// Only the board shape is validated.
    pub(crate) fn from_snapshot_unchecked(snapshot: EngineSnapshot) -> Result<Self, EngineError> {
        let EngineSnapshot {
            board_size,
            cells,
            moves_played,
            active_player,
            state,
            wins,
        } = snapshot;

        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(EngineError::CorruptSnapshot(format!(
                "board size {} is outside {}..={}",
                board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )));
        }

        let cell_count = cells.len();
        let board = Board::from_cells(board_size, cells).ok_or_else(|| {
            EngineError::CorruptSnapshot(format!(
                "expected {} cells for a {}x{} board, found {}",
                board_size * board_size,
                board_size,
                board_size,
                cell_count
            ))
        })?;

        let winning_line = state.winner().and_then(|winner| {
            Line::all(board_size)
                .find(|line| rules::owned_count(&board, *line, winner) == board_size)
        });

        Ok(Self {
            board_size,
            board,
            moves_played,
            active_player,
            state,
            wins,
            winning_line,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            board: Board::new(DEFAULT_BOARD_SIZE),
            moves_played: 0,
            active_player: Player::One,
            state: GameState::InProgress,
            wins: Wins::default(),
            winning_line: None,
        }
    }
}
