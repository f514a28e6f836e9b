//! Line-oriented game loop over any reader/writer pair.

use crate::input::{parse_command, Command};
use crate::render::{mark_symbol, render_board};
use crate::session::{GameSession, SessionError};
use derive_more::{Display, Error};
use derive_new::new;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tictac_engine::TileState;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Moves: 'row col' (0-based, also 'row,col' or 'row-col') or a cell number.
Commands: reset, save, help, quit.";

/// Drives a [`GameSession`] from text input.
///
/// When a save path is set, the session is written there when the loop
/// ends (on `quit` or end of input) as well as on `save`.
#[derive(new)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    save_path: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Consumes the terminal, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError`] if reading input or writing output fails, or
    /// if the final save on exit fails. A failed `save` command is reported
    /// in the output and the loop continues.
    pub fn run(&mut self, session: &mut GameSession) -> Result<(), TerminalError> {
        info!("Starting game loop");
        writeln!(self.output, "{}", HELP)?;

        loop {
            writeln!(self.output)?;
            write!(self.output, "{}", render_board(session.engine()))?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            let command = match parse_command(&line, session.engine().board_size()) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            match command {
                Command::Move(coord) => {
                    let outcome = session.play(coord)?;
                    if outcome.tile == TileState::Invalid {
                        if outcome.state.is_terminal() {
                            writeln!(self.output, "The round is over. Type 'reset' to play again.")?;
                        } else {
                            writeln!(self.output, "Tile {} is already taken.", coord)?;
                        }
                    } else if outcome.state.is_terminal() {
                        writeln!(self.output, "{}", outcome.state)?;
                    } else {
                        writeln!(
                            self.output,
                            "{} played {} at {}.",
                            outcome.mover,
                            mark_symbol(outcome.mover),
                            coord
                        )?;
                    }
                }
                Command::Reset => {
                    session.reset();
                    writeln!(self.output, "New round.")?;
                }
                Command::Save => {
                    if let Err(e) = self.save(session) {
                        warn!(error = %e, "Save command failed");
                        writeln!(self.output, "Could not save: {}", e.message)?;
                    }
                }
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::Quit => break,
            }
        }

        if self.save_path.is_some() {
            self.save(session)?;
        }
        info!("Game loop finished");
        Ok(())
    }

    fn save(&mut self, session: &GameSession) -> Result<(), TerminalError> {
        match &self.save_path {
            Some(path) => {
                session.save(path)?;
                writeln!(self.output, "Saved to {}.", path.display())?;
            }
            None => {
                warn!("Save requested without a save path");
                writeln!(self.output, "No save file configured (start with --save FILE).")?;
            }
        }
        Ok(())
    }
}

/// Error ending the game loop.
#[derive(Debug, Clone, Display, Error)]
#[display("Terminal error: {} at {}:{}", message, file, line)]
pub struct TerminalError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TerminalError {
    /// Creates a new terminal error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for TerminalError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<SessionError> for TerminalError {
    #[track_caller]
    fn from(err: SessionError) -> Self {
        Self::new(err.message)
    }
}
