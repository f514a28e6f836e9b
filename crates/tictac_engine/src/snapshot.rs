//! Serializable engine state.
//!
//! An [`EngineSnapshot`] captures everything needed to restore a
//! [`GameEngine`] exactly across a host suspend/resume cycle. Any serde
//! format works; the engine itself serializes through this type.

use crate::engine::GameEngine;
use crate::error::EngineError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::types::{GameState, Player, TileState, Wins};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Plain-data copy of a [`GameEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Side length of the board.
    pub board_size: usize,
    /// Tiles in row-major order.
    pub cells: Vec<TileState>,
    /// Moves applied in the current round.
    pub moves_played: usize,
    /// Player whose turn it is.
    pub active_player: Player,
    /// Round classification.
    pub state: GameState,
    /// Win counters across rounds.
    pub wins: Wins,
}

impl GameEngine {
    /// Captures the full engine state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board_size: self.board_size(),
            cells: self.board().cells().to_vec(),
            moves_played: self.moves_played(),
            active_player: self.active_player(),
            state: self.state(),
            wins: self.wins(),
        }
    }

    /// Rebuilds an engine from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CorruptSnapshot`] if the snapshot describes a
    /// state the engine could never reach: wrong cell count, stored `Invalid`
    /// tiles, a move counter that disagrees with the board, impossible mark
    /// counts, or a win/draw the board does not support.
    #[instrument(skip(snapshot), fields(board_size = snapshot.board_size))]
    pub fn restore(snapshot: EngineSnapshot) -> Result<Self, EngineError> {
        let engine = Self::from_snapshot_unchecked(snapshot)?;

        EngineInvariants::check_all(&engine).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejecting snapshot");
            EngineError::CorruptSnapshot(descriptions)
        })?;

        Ok(engine)
    }
}

impl From<GameEngine> for EngineSnapshot {
    fn from(engine: GameEngine) -> Self {
        engine.snapshot()
    }
}

impl TryFrom<EngineSnapshot> for GameEngine {
    type Error = EngineError;

    fn try_from(snapshot: EngineSnapshot) -> Result<Self, Self::Error> {
        GameEngine::restore(snapshot)
    }
}
