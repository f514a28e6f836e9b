//! Observers notified of session events.
//!
//! Delivery is synchronous and inline: after a move is applied the session
//! calls [`SessionObserver::on_move`] on every observer in registration
//! order, then [`SessionObserver::on_round_over`] if the move ended the
//! round. Observers only receive data and never get a handle back to the
//! session, so they cannot re-enter it.

use tictac_engine::{GameState, MoveOutcome, Wins};
use tracing::info;

/// Receives events from a [`crate::GameSession`].
pub trait SessionObserver {
    /// A mark was placed.
    fn on_move(&mut self, _outcome: &MoveOutcome) {}

    /// The round ended in a win or draw.
    fn on_round_over(&mut self, _state: GameState, _wins: Wins) {}

    /// The board was reset for a new round.
    fn on_reset(&mut self) {}
}

/// Observer that records session events as tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn on_move(&mut self, outcome: &MoveOutcome) {
        info!(
            player = %outcome.mover,
            coord = %outcome.coord,
            state = ?outcome.state,
            "Move played"
        );
    }

    fn on_round_over(&mut self, state: GameState, wins: Wins) {
        info!(%state, %wins, "Round over");
    }

    fn on_reset(&mut self) {
        info!("New round");
    }
}
