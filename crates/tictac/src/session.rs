//! Game session: one engine, its observers, and save/restore hooks.

use crate::config::Settings;
use crate::observer::SessionObserver;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_engine::{Coord, EngineError, GameEngine, MoveOutcome};
use tracing::{debug, info, instrument, warn};

/// Version written into session files.
pub const SESSION_FORMAT_VERSION: u32 = 1;

/// On-disk form of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedSession {
    version: u32,
    engine: GameEngine,
}

/// A game session owning one engine.
///
/// Sessions are constructed explicitly and handed to whatever presents
/// them; there is no process-wide game instance.
pub struct GameSession {
    engine: GameEngine,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("engine", &self.engine)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// Creates a session on a fresh board of the given size.
    #[instrument]
    pub fn new(board_size: usize) -> Result<Self, SessionError> {
        let engine = GameEngine::new(board_size)?;
        info!(board_size, "Creating new game session");
        Ok(Self::from_engine(engine))
    }

    /// Creates a session sized from settings.
    #[instrument(skip(settings))]
    pub fn from_settings(settings: &Settings) -> Result<Self, SessionError> {
        Self::new(settings.board_size())
    }

    /// Wraps an existing engine.
    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            engine,
            observers: Vec::new(),
        }
    }

    /// Read access to the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer registered");
    }

    /// Plays a move for the active player.
    ///
    /// A rejected move (occupied tile, or round already over) is returned
    /// with `tile == Invalid` and does not notify observers.
    #[instrument(skip(self), fields(player = %self.engine.active_player()))]
    pub fn play(&mut self, coord: Coord) -> Result<MoveOutcome, SessionError> {
        let outcome = self.engine.play(coord.row, coord.col)?;

        if !outcome.accepted() {
            debug!(state = ?outcome.state, "Move rejected");
            return Ok(outcome);
        }

        for observer in &mut self.observers {
            observer.on_move(&outcome);
        }

        if outcome.state.is_terminal() {
            let wins = self.engine.wins();
            for observer in &mut self.observers {
                observer.on_round_over(outcome.state, wins);
            }
        }

        Ok(outcome)
    }

    /// Starts a new round, keeping the scores.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.reset_board();
        for observer in &mut self.observers {
            observer.on_reset();
        }
    }

    /// Writes the session to a JSON file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let saved = SavedSession {
            version: SESSION_FORMAT_VERSION,
            engine: self.engine.clone(),
        };
        let json = serde_json::to_string_pretty(&saved)
            .map_err(|e| SessionError::new(format!("Failed to encode session: {}", e)))?;
        std::fs::write(path.as_ref(), json)
            .map_err(|e| SessionError::new(format!("Failed to write session file: {}", e)))?;
        info!("Session saved");
        Ok(())
    }

    /// Restores a session from a JSON file written by [`GameSession::save`].
    ///
    /// Observers are not persisted; register them again after loading.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SessionError::new(format!("Failed to read session file: {}", e)))?;
        let saved: SavedSession = serde_json::from_str(&json)
            .map_err(|e| SessionError::new(format!("Failed to decode session: {}", e)))?;

        if saved.version != SESSION_FORMAT_VERSION {
            warn!(version = saved.version, "Unsupported session file version");
            return Err(SessionError::new(format!(
                "Unsupported session format version {} (expected {})",
                saved.version, SESSION_FORMAT_VERSION
            )));
        }

        info!(
            board_size = saved.engine.board_size(),
            moves_played = saved.engine.moves_played(),
            "Session restored"
        );
        Ok(Self::from_engine(saved.engine))
    }
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", message, file, line)]
pub struct SessionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<EngineError> for SessionError {
    #[track_caller]
    fn from(err: EngineError) -> Self {
        Self::new(format!("Engine error: {}", err))
    }
}
