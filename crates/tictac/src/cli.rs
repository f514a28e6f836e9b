//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tictac - tic-tac-toe on boards of any size
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play N-by-N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Board size (overrides the config file; clamped to the allowed range)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Resume a saved session instead of starting a new one
        #[arg(long)]
        resume: Option<PathBuf>,

        /// Where to save the session (on 'save' and on exit)
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print a saved session
    Show {
        /// Session file to print
        path: PathBuf,
    },
}
