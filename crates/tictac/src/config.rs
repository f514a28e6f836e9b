//! Game settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictac_engine::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use tracing::{debug, info, instrument, warn};

/// User-configurable settings for a game session.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Requested board size (clamped by [`Settings::board_size`]).
    #[getter(skip)]
    board_size: usize,

    /// Smallest board size the player may pick.
    min_board_size: usize,

    /// Largest board size the player may pick.
    max_board_size: usize,

    /// Where the session is saved on exit, if anywhere.
    save_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            min_board_size: MIN_BOARD_SIZE,
            max_board_size: 10,
            save_path: None,
        }
    }
}

impl Settings {
    /// Creates settings with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml_str(&content)?;
        info!(board_size = settings.board_size, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Overrides the requested board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Overrides the save path.
    pub fn with_save_path(mut self, path: PathBuf) -> Self {
        self.save_path = Some(path);
        self
    }

    /// Checks that the allowed size range is usable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_board_size > self.max_board_size {
            return Err(ConfigError::new(format!(
                "min_board_size ({}) is greater than max_board_size ({})",
                self.min_board_size, self.max_board_size
            )));
        }
        if self.max_board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "max_board_size ({}) is below the playable minimum of {}",
                self.max_board_size, MIN_BOARD_SIZE
            )));
        }
        if self.max_board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "max_board_size ({}) is above the playable maximum of {}",
                self.max_board_size, MAX_BOARD_SIZE
            )));
        }
        Ok(())
    }

    /// The board size to play on, clamped into the allowed range.
    ///
    /// The lower bound is never below the engine minimum of 3.
    #[instrument(skip(self))]
    pub fn board_size(&self) -> usize {
        let lower = self.min_board_size.max(MIN_BOARD_SIZE);
        let upper = self.max_board_size.max(lower);
        let size = self.board_size.clamp(lower, upper);
        if size != self.board_size {
            warn!(
                requested = self.board_size,
                clamped = size,
                lower,
                upper,
                "Board size out of range, clamping"
            );
        }
        size
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
