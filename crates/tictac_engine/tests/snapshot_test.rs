//! Tests for capturing and restoring engine state.

use tictac_engine::{
    EngineError, EngineSnapshot, GameEngine, GameState, Line, Player, TileState, Wins,
};

fn mid_game() -> GameEngine {
    let mut engine = GameEngine::new(4).unwrap();
    for (row, col) in [(0, 0), (3, 3), (1, 2)] {
        engine.play(row, col).unwrap();
    }
    engine
}

#[test]
fn test_restore_mid_game() {
    let engine = mid_game();
    let restored = GameEngine::restore(engine.snapshot()).expect("Valid snapshot");
    assert_eq!(restored, engine);
    assert_eq!(restored.active_player(), Player::Two);
    assert_eq!(restored.moves_played(), 3);
}

#[test]
fn test_json_preserves_finished_round() {
    let mut engine = GameEngine::new(3).unwrap();
    for (row, col) in [(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)] {
        engine.play(row, col).unwrap();
    }

    let json = serde_json::to_string(&engine).unwrap();
    let restored: GameEngine = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.state(), GameState::PlayerOneWin);
    assert_eq!(restored.winning_line(), Some(Line::AntiDiagonal));
    assert_eq!(restored.wins().player_one, 1);
    assert_eq!(restored, engine);
}

#[test]
fn test_restored_engine_keeps_playing() {
    let engine = mid_game();
    let mut restored = GameEngine::restore(engine.snapshot()).unwrap();
    let outcome = restored.play(2, 2).unwrap();
    assert_eq!(outcome.tile, TileState::PlayerTwo);
    assert_eq!(restored.choose_tile(0, 0), Ok(TileState::Invalid));
}

#[test]
fn test_rejects_wrong_cell_count() {
    let mut snapshot = mid_game().snapshot();
    snapshot.cells.pop();
    assert!(matches!(
        GameEngine::restore(snapshot),
        Err(EngineError::CorruptSnapshot(_))
    ));
}

#[test]
fn test_rejects_small_board() {
    let snapshot = EngineSnapshot {
        board_size: 2,
        cells: vec![TileState::Blank; 4],
        ..GameEngine::default().snapshot()
    };
    assert!(matches!(
        GameEngine::restore(snapshot),
        Err(EngineError::CorruptSnapshot(_))
    ));
}

#[test]
fn test_rejects_stored_invalid() {
    let mut snapshot = GameEngine::default().snapshot();
    snapshot.cells[4] = TileState::Invalid;
    let err = GameEngine::restore(snapshot).unwrap_err();
    assert!(err.to_string().contains("Invalid"));
}

#[test]
fn test_rejects_counter_mismatch() {
    let mut snapshot = mid_game().snapshot();
    snapshot.moves_played = 0;
    assert!(GameEngine::restore(snapshot).is_err());
}

#[test]
fn test_rejects_impossible_mark_counts() {
    let mut snapshot = GameEngine::default().snapshot();
    snapshot.cells[0] = TileState::PlayerTwo;
    snapshot.moves_played = 1;
    assert!(GameEngine::restore(snapshot).is_err());
}

#[test]
fn test_rejects_unbacked_draw() {
    let mut snapshot = mid_game().snapshot();
    snapshot.state = GameState::Draw;
    assert!(GameEngine::restore(snapshot).is_err());
}

#[test]
fn test_rejects_corrupt_json() {
    let json = r#"{"board_size":3,"cells":[],"moves_played":0,"active_player":"One","state":"InProgress","wins":{"player_one":0,"player_two":0}}"#;
    let result: Result<GameEngine, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_rejects_in_progress_with_completed_line() {
    let mut cells = vec![TileState::Blank; 9];
    cells[..3].fill(TileState::PlayerOne);
    cells[3..5].fill(TileState::PlayerTwo);
    let snapshot = EngineSnapshot {
        cells,
        moves_played: 5,
        active_player: Player::Two,
        ..GameEngine::default().snapshot()
    };
    let err = GameEngine::restore(snapshot).unwrap_err();
    assert!(err.to_string().contains("completed line"));
}

#[test]
fn test_rejects_active_player_out_of_turn() {
    let mut snapshot = GameEngine::default().snapshot();
    snapshot.cells[4] = TileState::PlayerOne;
    snapshot.moves_played = 1;
    snapshot.active_player = Player::One;
    let err = GameEngine::restore(snapshot).unwrap_err();
    assert!(err.to_string().contains("Active player"));
}

#[test]
fn test_rejects_win_without_counter() {
    let mut engine = GameEngine::new(3).unwrap();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.play(row, col).unwrap();
    }
    let snapshot = EngineSnapshot {
        wins: Wins::default(),
        ..engine.snapshot()
    };
    let err = GameEngine::restore(snapshot).unwrap_err();
    assert!(err.to_string().contains("win counter"));
}

#[test]
fn test_rejects_oversized_board_without_panicking() {
    let json = r#"{"board_size":8589934592,"cells":[],"moves_played":0,"active_player":"One","state":"InProgress","wins":{"player_one":0,"player_two":0}}"#;
    let result: Result<GameEngine, _> = serde_json::from_str(json);
    assert!(result.is_err());

    let snapshot = EngineSnapshot {
        board_size: usize::MAX,
        cells: Vec::new(),
        ..GameEngine::default().snapshot()
    };
    assert!(matches!(
        GameEngine::restore(snapshot),
        Err(EngineError::CorruptSnapshot(_))
    ));
}
