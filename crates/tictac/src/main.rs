//! Tictac - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use tictac::cli::{Cli, Command};
use tictac::{render_board, GameSession, Settings, Terminal, TracingObserver};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            size,
            config,
            resume,
            save,
        } => run_play(size, config, resume, save),
        Command::Show { path } => run_show(path),
    }
}

/// Play a game on stdin/stdout
#[instrument]
fn run_play(
    size: Option<usize>,
    config: Option<std::path::PathBuf>,
    resume: Option<std::path::PathBuf>,
    save: Option<std::path::PathBuf>,
) -> Result<()> {
    let mut settings = match config {
        Some(path) => Settings::from_file(&path)
            .with_context(|| format!("Loading settings from {}", path.display()))?,
        None => Settings::new(),
    };
    if let Some(size) = size {
        settings = settings.with_board_size(size);
    }
    // A resumed game is written back where it came from unless told otherwise.
    let save = save.or_else(|| match settings.save_path() {
        Some(_) => None,
        None => resume.clone(),
    });
    if let Some(path) = save {
        settings = settings.with_save_path(path);
    }

    let mut session = match resume {
        Some(path) => GameSession::load(&path)
            .with_context(|| format!("Resuming session from {}", path.display()))?,
        None => GameSession::from_settings(&settings)?,
    };
    session.subscribe(Box::new(TracingObserver));
    info!(board_size = session.engine().board_size(), "Session ready");

    let stdin = std::io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), std::io::stdout(), settings.save_path().clone());
    terminal.run(&mut session)?;
    Ok(())
}

/// Print a saved session
#[instrument]
fn run_show(path: std::path::PathBuf) -> Result<()> {
    let session = GameSession::load(&path)
        .with_context(|| format!("Reading session from {}", path.display()))?;
    print!("{}", render_board(session.engine()));
    Ok(())
}
