//! N×N tic-tac-toe game engine.
//!
//! The engine owns the board, turn order, move legality and win/draw
//! classification. It performs no I/O; hosts drive it one move at a time
//! and persist it through [`EngineSnapshot`].
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameEngine, GameState, TileState};
//!
//! let mut engine = GameEngine::new(3)?;
//! assert_eq!(engine.choose_tile(1, 1)?, TileState::PlayerOne);
//! assert_eq!(engine.classify_state(1, 1)?, GameState::InProgress);
//! engine.advance_turn();
//! assert_eq!(engine.choose_tile(1, 1)?, TileState::Invalid);
//! # Ok::<(), tictac_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
pub mod invariants;
pub mod rules;
mod snapshot;
mod types;

pub use board::Board;
pub use engine::{GameEngine, MoveOutcome};
pub use error::EngineError;
pub use rules::Line;
pub use snapshot::EngineSnapshot;
pub use types::{Coord, GameState, Player, TileState, Wins};

/// Board size used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Smallest board on which a line can be completed meaningfully.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board the engine accepts.
pub const MAX_BOARD_SIZE: usize = 1024;
