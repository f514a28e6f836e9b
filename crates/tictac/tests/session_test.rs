//! Tests for game sessions, observers and save/restore.

use std::cell::RefCell;
use std::rc::Rc;
use tictac::{GameSession, SessionObserver, Settings};
use tictac_engine::{Coord, GameState, MoveOutcome, Player, TileState, Wins};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Move(&'static str, Coord),
    RoundOver(&'static str, GameState, Wins),
    Reset(&'static str),
}

struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<Event>>>,
}

impl SessionObserver for Recorder {
    fn on_move(&mut self, outcome: &MoveOutcome) {
        self.log.borrow_mut().push(Event::Move(self.name, outcome.coord));
    }

    fn on_round_over(&mut self, state: GameState, wins: Wins) {
        self.log
            .borrow_mut()
            .push(Event::RoundOver(self.name, state, wins));
    }

    fn on_reset(&mut self) {
        self.log.borrow_mut().push(Event::Reset(self.name));
    }
}

fn recorded_session() -> (GameSession, Rc<RefCell<Vec<Event>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut session = GameSession::new(3).unwrap();
    for name in ["first", "second"] {
        session.subscribe(Box::new(Recorder {
            name,
            log: Rc::clone(&log),
        }));
    }
    (session, log)
}

fn play(session: &mut GameSession, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        session.play(Coord::new(row, col)).unwrap();
    }
}

#[test]
fn test_session_from_settings() {
    let settings = Settings::new().with_board_size(5);
    let session = GameSession::from_settings(&settings).unwrap();
    assert_eq!(session.engine().board_size(), 5);
}

#[test]
fn test_session_rejects_small_board() {
    let err = GameSession::new(2).unwrap_err();
    assert!(err.message.contains("Board size 2"));
}

#[test]
fn test_observers_notified_in_order() {
    let (mut session, log) = recorded_session();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    let events = log.borrow();
    assert_eq!(events.len(), 12);
    assert_eq!(events[0], Event::Move("first", Coord::new(0, 0)));
    assert_eq!(events[1], Event::Move("second", Coord::new(0, 0)));

    let wins = Wins {
        player_one: 1,
        player_two: 0,
    };
    assert_eq!(events[8], Event::Move("first", Coord::new(0, 2)));
    assert_eq!(events[9], Event::Move("second", Coord::new(0, 2)));
    assert_eq!(
        events[10],
        Event::RoundOver("first", GameState::PlayerOneWin, wins)
    );
    assert_eq!(
        events[11],
        Event::RoundOver("second", GameState::PlayerOneWin, wins)
    );
}

#[test]
fn test_rejected_move_not_broadcast() {
    let (mut session, log) = recorded_session();
    session.play(Coord::new(1, 1)).unwrap();
    let outcome = session.play(Coord::new(1, 1)).unwrap();

    assert_eq!(outcome.tile, TileState::Invalid);
    assert_eq!(log.borrow().len(), 2);
    assert_eq!(session.engine().active_player(), Player::Two);
}

#[test]
fn test_out_of_range_is_error() {
    let (mut session, log) = recorded_session();
    assert!(session.play(Coord::new(0, 3)).is_err());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_reset_notifies_and_keeps_score() {
    let (mut session, log) = recorded_session();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    session.reset();

    assert_eq!(session.engine().state(), GameState::InProgress);
    assert_eq!(session.engine().wins().player_one, 1);
    let events = log.borrow();
    assert_eq!(events[events.len() - 2], Event::Reset("first"));
    assert_eq!(events[events.len() - 1], Event::Reset("second"));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut session = GameSession::new(4).unwrap();
    play(&mut session, &[(0, 0), (3, 3), (2, 1)]);
    session.save(&path).unwrap();

    let mut loaded = GameSession::load(&path).unwrap();
    assert_eq!(loaded.engine(), session.engine());

    let outcome = loaded.play(Coord::new(1, 1)).unwrap();
    assert_eq!(outcome.mover, Player::Two);
    assert_eq!(outcome.tile, TileState::PlayerTwo);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameSession::load(dir.path().join("nope.json")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_load_rejects_tampered_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    GameSession::new(3).unwrap().save(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["engine"]["moves_played"] = serde_json::json!(4);
    std::fs::write(&path, value.to_string()).unwrap();

    let err = GameSession::load(&path).unwrap_err();
    assert!(err.message.contains("Failed to decode"));
}

#[test]
fn test_load_rejects_unknown_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    GameSession::new(3).unwrap().save(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["version"] = serde_json::json!(99);
    std::fs::write(&path, value.to_string()).unwrap();

    let err = GameSession::load(&path).unwrap_err();
    assert!(err.message.contains("Unsupported session format version 99"));
}
