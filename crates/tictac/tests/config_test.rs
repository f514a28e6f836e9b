//! Tests for loading settings from disk.

use std::io::Write;
use tictac::Settings;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 6").unwrap();
    writeln!(file, "max_board_size = 8").unwrap();
    writeln!(file, "save_path = \"game.json\"").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.board_size(), 6);
    assert_eq!(*settings.max_board_size(), 8);
    assert_eq!(
        settings.save_path().as_deref(),
        Some(std::path::Path::new("game.json"))
    );
}

#[test]
fn test_empty_file_is_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_missing_file() {
    let err = Settings::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_clamped_to_configured_range() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 12\nmin_board_size = 4\nmax_board_size = 6").unwrap();
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.board_size(), 6);
    assert_eq!(settings.clone().with_board_size(3).board_size(), 4);
}
