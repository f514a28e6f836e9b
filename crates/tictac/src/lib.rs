//! Tictac - a terminal host for the tictac engine.
//!
//! # Architecture
//!
//! - **Session**: owns one [`tictac_engine::GameEngine`], notifies observers, saves and restores
//! - **Config**: board-size settings from TOML
//! - **Input / Render**: text in, text out
//! - **Terminal**: the line-oriented game loop tying them together
//!
//! # Example
//!
//! ```no_run
//! use tictac::{GameSession, Settings, Terminal, TracingObserver};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_file("tictac.toml")?;
//! let mut session = GameSession::from_settings(&settings)?;
//! session.subscribe(Box::new(TracingObserver));
//!
//! let stdin = std::io::stdin();
//! let mut terminal = Terminal::new(stdin.lock(), std::io::stdout(), settings.save_path().clone());
//! terminal.run(&mut session)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod observer;
mod render;
mod session;
mod terminal;

pub mod cli;

pub use config::{ConfigError, Settings};
pub use input::{parse_command, parse_coord, Command, InputError};
pub use observer::{SessionObserver, TracingObserver};
pub use render::{mark_symbol, render_board, status_line};
pub use session::{GameSession, SessionError, SESSION_FORMAT_VERSION};
pub use terminal::{Terminal, TerminalError};
