//! Computer policy integration tests.

use rust_mill::ai::{HeuristicPolicy, MovePolicy, RandomPolicy};
use rust_mill::core::{Cell, CellState, GameConfig, GameState, Player, Ply};
use rust_mill::rules::legal_plies;

fn cell(row: u8, col: u8) -> Cell {
    Cell::new(row, col)
}

fn position(seed: u64, white: &[(u8, u8)], black: &[(u8, u8)], placed: (u8, u8)) -> GameState {
    let mut state = GameState::new(seed);
    for &(row, col) in white {
        state.board.set(cell(row, col), CellState::Occupied(Player::White));
    }
    for &(row, col) in black {
        state.board.set(cell(row, col), CellState::Occupied(Player::Black));
    }
    state.players[Player::White].placed = placed.0;
    state.players[Player::Black].placed = placed.1;
    state
}

// =============================================================================
// Heuristic Placement Tests
// =============================================================================

/// Test that placement occupies the opponent's threat.
#[test]
fn test_places_on_threat() {
    let config = GameConfig::default();
    let mut state = position(1, &[(3, 0), (3, 1)], &[(0, 0)], (2, 1));
    assert_eq!(
        HeuristicPolicy.choose(&mut state, Player::Black, &config),
        Some(Ply::Place { to: cell(3, 2) })
    );
}

/// Test that the first threat in row-major order is blocked.
#[test]
fn test_places_on_first_threat() {
    let config = GameConfig::default();
    let mut state = position(1, &[(6, 0), (6, 3), (0, 3), (1, 3)], &[], (4, 0));
    assert_eq!(
        HeuristicPolicy.choose(&mut state, Player::Black, &config),
        Some(Ply::Place { to: cell(2, 3) })
    );
}

/// Test that an unthreatened placement lands on an empty point.
#[test]
fn test_random_placement_is_empty_point() {
    let config = GameConfig::default();
    for seed in 0..20 {
        let mut state = position(seed, &[(0, 0)], &[], (1, 0));
        match HeuristicPolicy.choose(&mut state, Player::Black, &config) {
            Some(Ply::Place { to }) => assert!(state.board.is_vacant(to), "seed {seed} chose {to}"),
            other => panic!("seed {seed} chose {other:?}"),
        }
    }
}

/// Test that the same seed reproduces the same choice.
#[test]
fn test_placement_is_seeded() {
    let config = GameConfig::default();
    let mut first = position(99, &[(0, 0)], &[], (1, 0));
    let mut second = position(99, &[(0, 0)], &[], (1, 0));
    assert_eq!(
        HeuristicPolicy.choose(&mut first, Player::Black, &config),
        HeuristicPolicy.choose(&mut second, Player::Black, &config)
    );
}

// =============================================================================
// Heuristic Movement Tests
// =============================================================================

/// Test that a step onto the threat is preferred.
#[test]
fn test_steps_onto_threat() {
    let config = GameConfig::default();
    let mut state = position(
        1,
        &[(0, 0), (0, 3), (1, 1), (1, 5)],
        &[(3, 6), (4, 2), (5, 5), (6, 0)],
        (9, 9),
    );
    assert_eq!(
        HeuristicPolicy.choose(&mut state, Player::Black, &config),
        Some(Ply::Step { from: cell(3, 6), to: cell(0, 6) })
    );
}

/// Test that the earliest threat wins even when a later one is reachable
/// from an earlier piece.
#[test]
fn test_steps_onto_first_reachable_threat() {
    let config = GameConfig::default();
    // Threats at (0,6) and (4,4); (3,4) can only reach the second.
    let mut state = position(
        1,
        &[(0, 0), (0, 3), (4, 2), (4, 3)],
        &[(3, 4), (3, 6), (6, 0), (6, 6)],
        (9, 9),
    );
    assert_eq!(
        HeuristicPolicy.choose(&mut state, Player::Black, &config),
        Some(Ply::Step { from: cell(3, 6), to: cell(0, 6) })
    );
}

/// Test that without a threat the step is one of the legal ones.
#[test]
fn test_random_step_is_legal() {
    let config = GameConfig::default();
    for seed in 0..20 {
        let mut state = position(
            seed,
            &[(0, 0), (6, 6), (1, 1), (5, 5)],
            &[(0, 3), (3, 0), (3, 6), (6, 3)],
            (9, 9),
        );
        let legal = legal_plies(&state, Player::Black, &config);
        let ply = HeuristicPolicy.choose(&mut state, Player::Black, &config).unwrap();
        assert!(legal.contains(&ply), "seed {seed} chose {ply}");
    }
}

/// Test that a blocked-in side has nothing to play.
#[test]
fn test_no_step_available() {
    let config = GameConfig::default();
    let mut state = position(
        1,
        &[(0, 3), (3, 0), (3, 6), (6, 3)],
        &[(0, 0), (0, 6), (6, 0), (6, 6)],
        (9, 9),
    );
    assert_eq!(HeuristicPolicy.choose(&mut state, Player::Black, &config), None);
}

// =============================================================================
// Heuristic Flying Tests
// =============================================================================

/// Test that flying goes to the first threat with one of the mover's pieces.
#[test]
fn test_flies_to_threat() {
    let config = GameConfig::default();
    let mut state = position(
        5,
        &[(0, 0), (0, 3), (4, 2), (4, 3)],
        &[(6, 6), (3, 1), (1, 5)],
        (9, 9),
    );

    match HeuristicPolicy.choose(&mut state, Player::Black, &config) {
        Some(Ply::Fly { from, to }) => {
            assert_eq!(to, cell(0, 6));
            assert!(state.board.get(from).is_owned_by(Player::Black));
        }
        other => panic!("expected a fly, got {other:?}"),
    }
}

/// Test that an unthreatened fly lands on an empty point.
#[test]
fn test_random_fly() {
    let config = GameConfig::default();
    for seed in 0..10 {
        let mut state = position(
            seed,
            &[(0, 0), (6, 6), (3, 1), (3, 5)],
            &[(1, 3), (5, 3), (2, 2)],
            (9, 9),
        );
        match HeuristicPolicy.choose(&mut state, Player::Black, &config) {
            Some(Ply::Fly { from, to }) => {
                assert!(state.board.is_vacant(to));
                assert!(state.board.get(from).is_owned_by(Player::Black));
            }
            other => panic!("seed {seed}: expected a fly, got {other:?}"),
        }
    }
}

// =============================================================================
// Random Policy Tests
// =============================================================================

/// Test that the random policy only plays legal plies.
#[test]
fn test_random_policy_is_legal() {
    let config = GameConfig::default();
    for seed in 0..20 {
        let mut state = position(seed, &[(0, 0), (0, 6)], &[(6, 6)], (9, 1));
        let legal = legal_plies(&state, Player::White, &config);
        let ply = RandomPolicy.choose(&mut state, Player::White, &config).unwrap();
        assert!(legal.contains(&ply));
    }
}

/// Test policy names used in logs.
#[test]
fn test_policy_names() {
    assert_eq!(HeuristicPolicy.name(), "heuristic");
    assert_eq!(RandomPolicy.name(), "random");
}
