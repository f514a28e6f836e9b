//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold for every engine value,
//! including one rebuilt from a snapshot. They are checked on restore and,
//! in debug builds, after every classification.

use crate::engine::GameEngine;
use crate::rules::{self, Line};
use crate::types::{Player, TileState};
use crate::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);
impl_invariant_set!(I1, I2, I3, I4, I5, I6);
impl_invariant_set!(I1, I2, I3, I4, I5, I6, I7);
impl_invariant_set!(I1, I2, I3, I4, I5, I6, I7, I8);

/// Invariant: the board is square and within the playable size range.
pub struct BoardDimensions;

impl Invariant<GameEngine> for BoardDimensions {
    fn holds(engine: &GameEngine) -> bool {
        let n = engine.board_size();
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n)
            && engine.board().size() == n
            && n.checked_mul(n) == Some(engine.board().cells().len())
    }

    fn description() -> &'static str {
        "Board is board_size x board_size and board_size is in 3..=1024"
    }
}

/// Invariant: the `Invalid` sentinel is never stored on the board.
pub struct NoStoredInvalid;

impl Invariant<GameEngine> for NoStoredInvalid {
    fn holds(engine: &GameEngine) -> bool {
        !engine.board().cells().contains(&TileState::Invalid)
    }

    fn description() -> &'static str {
        "Board never stores the Invalid sentinel"
    }
}

/// Invariant: the move counter equals the number of claimed tiles.
pub struct MoveCounterConsistent;

impl Invariant<GameEngine> for MoveCounterConsistent {
    fn holds(engine: &GameEngine) -> bool {
        engine.moves_played() == engine.board().occupied_count()
    }

    fn description() -> &'static str {
        "moves_played matches the number of occupied tiles"
    }
}

/// Invariant: player one has the same number of marks as player two, or one more.
pub struct AlternatingMarks;

impl Invariant<GameEngine> for AlternatingMarks {
    fn holds(engine: &GameEngine) -> bool {
        let one = engine.board().count(Player::One);
        let two = engine.board().count(Player::Two);
        one == two || one == two + 1
    }

    fn description() -> &'static str {
        "Player one has as many marks as player two, or one more"
    }
}

/// Invariant: a recorded terminal state is backed by the board.
///
/// A win requires the winner to own a full line; a draw requires a full board.
pub struct TerminalStateBacked;

impl Invariant<GameEngine> for TerminalStateBacked {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let n = board.size();
        match engine.state().winner() {
            Some(player) => Line::all(n).any(|line| rules::owned_count(board, line, player) == n),
            None if engine.state().is_terminal() => rules::is_full(board),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Recorded win or draw is consistent with the board"
    }
}

/// Invariant: a round still in progress has no completed line and a blank tile.
pub struct InProgressHasNoResult;

impl Invariant<GameEngine> for InProgressHasNoResult {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        engine.state().is_terminal()
            || (rules::check_winner(board).is_none() && !rules::is_full(board))
    }

    fn description() -> &'static str {
        "Round in progress has no completed line and is not full"
    }
}

/// Invariant: the active player follows from the mark counts.
///
/// While in progress, player one is to move exactly when both players have
/// the same number of marks. Once the round is over the active player is
/// whoever made the last move.
pub struct ActivePlayerMatchesMarks;

impl Invariant<GameEngine> for ActivePlayerMatchesMarks {
    fn holds(engine: &GameEngine) -> bool {
        let one = engine.board().count(Player::One);
        let two = engine.board().count(Player::Two);
        let one_expected = if engine.state().is_terminal() {
            one == two + 1
        } else {
            one == two
        };
        (engine.active_player() == Player::One) == one_expected
    }

    fn description() -> &'static str {
        "Active player is consistent with the marks on the board"
    }
}

/// Invariant: the winner of a finished round has at least one recorded win.
pub struct WinCounted;

impl Invariant<GameEngine> for WinCounted {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .state()
            .winner()
            .is_none_or(|winner| engine.wins().get(winner) >= 1)
    }

    fn description() -> &'static str {
        "Recorded winner has a non-zero win counter"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    BoardDimensions,
    NoStoredInvalid,
    MoveCounterConsistent,
    AlternatingMarks,
    TerminalStateBacked,
    InProgressHasNoResult,
    ActivePlayerMatchesMarks,
    WinCounted,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineSnapshot, GameState};

    #[test]
    fn test_invariant_set_holds_for_fresh_engine() {
        let engine = GameEngine::default();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new(4).unwrap();
        engine.play(0, 0).unwrap();
        engine.play(1, 1).unwrap();
        engine.play(2, 3).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_detects_counter_mismatch() {
        let mut engine = GameEngine::default();
        engine.play(0, 0).unwrap();
        let mut snapshot = engine.snapshot();
        snapshot.moves_played = 3;
        let corrupted = GameEngine::from_snapshot_unchecked(snapshot).unwrap();

        let violations = EngineInvariants::check_all(&corrupted).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MoveCounterConsistent::description());
    }

    #[test]
    fn test_detects_unbacked_win() {
        let snapshot = EngineSnapshot {
            state: GameState::PlayerTwoWin,
            ..GameEngine::default().snapshot()
        };
        let corrupted = GameEngine::from_snapshot_unchecked(snapshot).unwrap();
        assert!(!TerminalStateBacked::holds(&corrupted));
    }

    #[test]
    fn test_detects_turn_out_of_order() {
        let mut engine = GameEngine::default();
        engine.play(1, 1).unwrap();
        let snapshot = EngineSnapshot {
            active_player: Player::One,
            ..engine.snapshot()
        };
        let corrupted = GameEngine::from_snapshot_unchecked(snapshot).unwrap();

        let violations = EngineInvariants::check_all(&corrupted).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            ActivePlayerMatchesMarks::description()
        );
    }

    #[test]
    fn test_finished_rounds_satisfy_every_invariant() {
        // Player two wins on an even board; player one fills the odd draw.
        let mut engine = GameEngine::new(4).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (3, 3), (1, 3)] {
            engine.play(row, col).unwrap();
        }
        assert_eq!(engine.state(), GameState::PlayerTwoWin);
        assert!(EngineInvariants::check_all(&engine).is_ok());

        let mut engine = GameEngine::default();
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
            engine.play(row, col).unwrap();
        }
        assert_eq!(engine.state(), GameState::Draw);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::default();
        type TwoInvariants = (MoveCounterConsistent, AlternatingMarks);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
