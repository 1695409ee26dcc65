//! Snapshot and determinism integration tests.
//!
//! A seed plus the human's inputs must replay a game exactly, and a snapshot
//! taken at any point must resume to the same continuation.

use serde_json::json;

use rust_mill::core::{Cell, CellState, GameConfig, GameState, Player, SnapshotError};
use rust_mill::turn::{GameSnapshot, TurnController, TurnState};

fn config(seed: u64) -> GameConfig {
    GameConfig::default().with_ai_delay_ms(0).with_seed(seed)
}

/// Take one deterministic step: the first legal ply for the human, the first
/// opponent piece for a capture, or the computer's turn.
fn advance(game: &mut TurnController) -> TurnState {
    let human = game.human();
    match game.turn() {
        TurnState::AiDeliberating => game.run_ai_turn().unwrap(),
        TurnState::AwaitingCaptureSelection { .. } => {
            let victim = game.board().pieces(human.opponent()).next().unwrap();
            game.confirm_capture_selection(victim).unwrap()
        }
        TurnState::AwaitingHumanAction | TurnState::HumanMoveInFlight { .. } => {
            let ply = game.legal_plies(human)[0];
            if let Some(from) = ply.origin() {
                game.try_select_origin(from).unwrap();
            }
            game.try_move_to(ply.destination()).unwrap()
        }
        TurnState::GameOver(_) => game.turn(),
    }
}

fn played(seed: u64, steps: usize) -> TurnController {
    let mut game = TurnController::new(config(seed)).unwrap();
    for _ in 0..steps {
        advance(&mut game);
    }
    game
}

// =============================================================================
// Replay Tests
// =============================================================================

/// Test that the same seed and inputs produce the same game.
#[test]
fn test_replay_is_deterministic() {
    let first = played(3, 60);
    let second = played(3, 60);
    assert_eq!(first.snapshot(), second.snapshot());
}

/// Test that different seeds lead to different computer choices.
#[test]
fn test_seeds_diverge() {
    let games: Vec<_> = (0..5).map(|seed| played(seed, 10).snapshot().board).collect();
    assert!(games.iter().any(|board| *board != games[0]));
}

/// Test that resuming from bytes continues exactly as the original.
#[test]
fn test_resume_from_bytes_matches_uninterrupted_game() {
    let uninterrupted = played(11, 80);

    let halfway = played(11, 40).snapshot();
    let bytes = halfway.to_bytes().unwrap();
    let snapshot = GameSnapshot::from_bytes(&bytes).unwrap();
    let mut resumed = TurnController::restore(config(11), snapshot).unwrap();
    for _ in 0..40 {
        advance(&mut resumed);
    }

    assert_eq!(resumed.snapshot(), uninterrupted.snapshot());
}

/// Test that resuming from JSON continues exactly as the original.
#[test]
fn test_resume_from_json_matches_uninterrupted_game() {
    let uninterrupted = played(5, 50);

    let json = played(5, 25).snapshot().to_json().unwrap();
    let snapshot = GameSnapshot::from_json(&json).unwrap();
    let mut resumed = TurnController::restore(config(5), snapshot).unwrap();
    for _ in 0..25 {
        advance(&mut resumed);
    }

    assert_eq!(resumed.snapshot(), uninterrupted.snapshot());
}

/// Test that a pending capture survives a round trip.
#[test]
fn test_pending_capture_survives_restore() {
    let mut state = GameState::new(1);
    for (row, col) in [(3, 0), (3, 1)] {
        state.board.set(Cell::new(row, col), CellState::Occupied(Player::White));
    }
    state.board.set(Cell::new(6, 6), CellState::Occupied(Player::Black));
    state.players[Player::White].placed = 2;
    state.players[Player::Black].placed = 1;

    let snapshot = GameSnapshot::capture(&state, TurnState::AwaitingHumanAction);
    let mut game = TurnController::restore(config(1), snapshot).unwrap();
    game.try_move_to(Cell::new(3, 2)).unwrap();

    let json = game.snapshot().to_json().unwrap();
    let snapshot = GameSnapshot::from_json(&json).unwrap();
    let mut resumed = TurnController::restore(config(1), snapshot).unwrap();
    assert_eq!(
        resumed.turn(),
        TurnState::AwaitingCaptureSelection { player: Player::White, remaining: 1 }
    );
    assert_eq!(resumed.confirm_capture_selection(Cell::new(6, 6)), Ok(TurnState::AiDeliberating));
    assert_eq!(resumed.score(Player::White), 1);
}

// =============================================================================
// Encoding Tests
// =============================================================================

/// Test both encodings of a mid-game snapshot.
#[test]
fn test_encodings_round_trip() {
    let snapshot = played(8, 30).snapshot();

    let bytes = snapshot.to_bytes().unwrap();
    assert_eq!(GameSnapshot::from_bytes(&bytes).unwrap(), snapshot);

    let json = snapshot.to_json().unwrap();
    assert_eq!(GameSnapshot::from_json(&json).unwrap(), snapshot);
}

/// Test that scores are read back from a snapshot.
#[test]
fn test_snapshot_scores() {
    let game = played(2, 120);
    let scores = game.snapshot().scores();
    assert_eq!(scores[Player::White], game.score(Player::White));
    assert_eq!(scores[Player::Black], game.score(Player::Black));
}

// =============================================================================
// Validation Tests
// =============================================================================

/// Test that a snapshot with more pieces than placements is refused.
#[test]
fn test_restore_rejects_unplaced_pieces() {
    let mut state = GameState::new(1);
    state.board.set(Cell::new(0, 0), CellState::Occupied(Player::Black));
    let snapshot = GameSnapshot::capture(&state, TurnState::AwaitingHumanAction);

    assert!(matches!(
        TurnController::restore(config(1), snapshot),
        Err(SnapshotError::Inconsistent(_))
    ));
}

/// Test that a recorded mill missing from the board is refused.
#[test]
fn test_restore_rejects_broken_mill() {
    let mut state = GameState::new(1);
    for (row, col) in [(0, 0), (0, 3), (0, 6)] {
        state.board.set(Cell::new(row, col), CellState::Occupied(Player::White));
    }
    state.players[Player::White].placed = 3;
    state.mills.refresh(&state.board, Player::White);
    state.board.set(Cell::new(0, 3), CellState::Empty);
    let snapshot = GameSnapshot::capture(&state, TurnState::AwaitingHumanAction);

    assert!(matches!(
        TurnController::restore(config(1), snapshot),
        Err(SnapshotError::Inconsistent(_))
    ));
}

/// Test that a capture pending for the computer is refused.
#[test]
fn test_restore_rejects_computer_capture() {
    let snapshot = GameSnapshot::capture(
        &GameState::new(1),
        TurnState::AwaitingCaptureSelection { player: Player::Black, remaining: 1 },
    );
    assert!(TurnController::restore(config(1), snapshot).is_err());
}

/// Test that an invalid config is reported through the snapshot error.
#[test]
fn test_restore_rejects_bad_config() {
    let snapshot = GameSnapshot::capture(&GameState::new(1), TurnState::AwaitingHumanAction);
    let bad = config(1).with_flying_threshold(12);
    assert!(matches!(TurnController::restore(bad, snapshot), Err(SnapshotError::Config(_))));
}

/// Replace White's mill set in a JSON snapshot with `mills`.
fn with_white_mills(state: &GameState, mills: serde_json::Value) -> GameSnapshot {
    let snapshot = GameSnapshot::capture(state, TurnState::AwaitingHumanAction);
    let mut value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
    value["mills"]["sets"]["data"][0]["mills"] = mills;
    GameSnapshot::from_json(&value.to_string()).unwrap()
}

/// Test that a mill with cells off the grid is refused rather than read.
#[test]
fn test_restore_rejects_off_grid_mill() {
    let off_grid = json!({ "row": 9, "col": 9 });
    let snapshot = with_white_mills(&GameState::new(1), json!([[off_grid, off_grid, off_grid]]));

    assert!(matches!(
        TurnController::restore(config(1), snapshot),
        Err(SnapshotError::Inconsistent(_))
    ));
}

/// Test that a mill listed out of order or with repeated cells is refused.
#[test]
fn test_restore_rejects_malformed_mill() {
    let mut state = GameState::new(1);
    for (row, col) in [(0, 0), (0, 3), (0, 6)] {
        state.board.set(Cell::new(row, col), CellState::Occupied(Player::White));
    }
    state.players[Player::White].placed = 3;

    let reversed = json!([[
        { "row": 0, "col": 6 },
        { "row": 0, "col": 3 },
        { "row": 0, "col": 0 }
    ]]);
    let repeated = json!([[
        { "row": 0, "col": 0 },
        { "row": 0, "col": 0 },
        { "row": 0, "col": 0 }
    ]]);
    for mills in [reversed, repeated] {
        assert!(matches!(
            TurnController::restore(config(1), with_white_mills(&state, mills)),
            Err(SnapshotError::Inconsistent(_))
        ));
    }
}

/// Test that a piece in flight must be one of the human's.
#[test]
fn test_restore_rejects_foreign_origin() {
    let mut state = GameState::new(1);
    state.board.set(Cell::new(0, 0), CellState::Occupied(Player::Black));
    state.players[Player::Black].placed = 1;

    for origin in [Cell::new(0, 0), Cell::new(0, 3), Cell::new(9, 9)] {
        let snapshot = GameSnapshot::capture(&state, TurnState::HumanMoveInFlight { origin });
        assert!(matches!(
            TurnController::restore(config(1), snapshot),
            Err(SnapshotError::Inconsistent(_))
        ));
    }
}
