//! Board model, scanner and geometry integration tests.
//!
//! These tests pin the fixed 7x7 pattern and the scanning rule that every
//! adjacency question in the engine goes through.

use rust_mill::board::{
    connections, neighbour, neighbours, node_id, ring_of, scan, scan_until, Board, NodeId, Ring,
    ScanDepth, NODES,
};
use rust_mill::core::{Cell, CellState, Direction, Player};

fn reached(board: &Board, origin: (u8, u8), direction: Direction, depth: ScanDepth) -> Vec<Cell> {
    scan(board, Cell::new(origin.0, origin.1), direction, depth)
        .map(|(cell, _)| cell)
        .collect()
}

// =============================================================================
// Board Model Tests
// =============================================================================

/// Test that a fresh board has exactly the 24 ring points playable.
#[test]
fn test_fresh_board_points() {
    let board = Board::new();
    assert_eq!(board.points().count(), 24);
    assert_eq!(board.empty_cells().count(), 24);
    assert_eq!(board.points().collect::<Vec<_>>(), NODES.to_vec());
}

/// Test that the centre is neither playable nor vacant.
#[test]
fn test_center_is_excluded() {
    let board = Board::new();
    assert!(!board.is_playable(Cell::CENTER));
    assert!(!board.is_vacant(Cell::CENTER));
}

/// Test that off-grid lookups are answered without panicking.
#[test]
fn test_out_of_bounds_lookup() {
    let board = Board::new();
    assert_eq!(board.try_get(Cell::new(7, 0)), None);
    assert_eq!(board.try_get(Cell::new(0, 9)), None);
    assert!(!board.is_playable(Cell::new(7, 7)));
    assert!(!board.is_blocked(Cell::new(7, 7)));
}

/// Test that pattern cells report blocked and ring points do not.
#[test]
fn test_blocked_cells() {
    let board = Board::new();
    for cell in [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (5, 6), (6, 5)] {
        assert!(board.is_blocked(Cell::new(cell.0, cell.1)), "{cell:?} should be blocked");
    }
    for cell in [(0, 0), (3, 1), (3, 2), (2, 3), (5, 5)] {
        assert!(!board.is_blocked(Cell::new(cell.0, cell.1)), "{cell:?} should be a point");
    }
}

/// Test that piece lists are derived from occupancy in row-major order.
#[test]
fn test_pieces_follow_occupancy() {
    let mut board = Board::new();
    board.set(Cell::new(6, 6), CellState::Occupied(Player::White));
    board.set(Cell::new(0, 3), CellState::Occupied(Player::White));
    board.set(Cell::new(3, 4), CellState::Occupied(Player::Black));

    let white: Vec<_> = board.pieces(Player::White).collect();
    assert_eq!(white, vec![Cell::new(0, 3), Cell::new(6, 6)]);
    assert_eq!(board.count(Player::Black), 1);
    assert_eq!(board.empty_cells().count(), 21);

    board.set(Cell::new(0, 3), CellState::Empty);
    assert_eq!(board.count(Player::White), 1);
}

/// Test that the renderer snapshot mirrors the board.
#[test]
fn test_snapshot_lists_pieces() {
    let mut board = Board::new();
    board.set(Cell::new(3, 0), CellState::Occupied(Player::Black));

    let snapshot = board.snapshot();
    assert!(snapshot.white.is_empty());
    assert_eq!(snapshot.pieces(Player::Black), &[Cell::new(3, 0)]);
    assert_eq!(snapshot.cells[3][0], CellState::Occupied(Player::Black));
}

/// Test that the text rendering marks pieces and points.
#[test]
fn test_board_display() {
    let mut board = Board::new();
    board.set(Cell::new(0, 0), CellState::Occupied(Player::White));
    board.set(Cell::new(0, 6), CellState::Occupied(Player::Black));

    let text = board.to_string();
    let first_row = text.lines().nth(1).unwrap();
    assert!(first_row.starts_with("0  W"));
    assert!(first_row.ends_with('B'));
    assert_eq!(text.matches('+').count(), 22);
}

// =============================================================================
// Scanner Tests
// =============================================================================

/// Test that blocked cells are stepped over at depth 1.
#[test]
fn test_scan_skips_blocked_cells() {
    let board = Board::new();
    assert_eq!(reached(&board, (0, 0), Direction::Right, ScanDepth::MOVE), vec![Cell::new(0, 3)]);
    assert_eq!(reached(&board, (0, 0), Direction::Down, ScanDepth::MOVE), vec![Cell::new(3, 0)]);
    assert_eq!(reached(&board, (3, 1), Direction::Up, ScanDepth::MOVE), vec![Cell::new(1, 1)]);
}

/// Test that adjacent points are reached without any extension.
#[test]
fn test_scan_adjacent_points() {
    let board = Board::new();
    assert_eq!(reached(&board, (3, 0), Direction::Right, ScanDepth::MOVE), vec![Cell::new(3, 1)]);
    assert_eq!(reached(&board, (0, 3), Direction::Down, ScanDepth::MOVE), vec![Cell::new(1, 3)]);
}

/// Test that the centre ends a line instead of being crossed.
#[test]
fn test_scan_stops_at_center() {
    let board = Board::new();
    assert!(reached(&board, (3, 2), Direction::Right, ScanDepth::MOVE).is_empty());
    assert!(reached(&board, (2, 3), Direction::Down, ScanDepth::MILL).is_empty());
    assert_eq!(
        reached(&board, (3, 0), Direction::Right, ScanDepth::MILL),
        vec![Cell::new(3, 1), Cell::new(3, 2)]
    );
}

/// Test that leaving the grid ends a line.
#[test]
fn test_scan_stops_at_edge() {
    let board = Board::new();
    assert!(reached(&board, (0, 0), Direction::Up, ScanDepth::MILL).is_empty());
    assert!(reached(&board, (1, 1), Direction::Left, ScanDepth::MOVE).is_empty());
    assert!(reached(&board, (2, 2), Direction::Up, ScanDepth::MOVE).is_empty());
}

/// Test that deeper scans reach further along a side.
#[test]
fn test_scan_depth() {
    let board = Board::new();
    assert_eq!(
        reached(&board, (0, 0), Direction::Right, ScanDepth::MILL),
        vec![Cell::new(0, 3), Cell::new(0, 6)]
    );
    assert_eq!(
        reached(&board, (6, 6), Direction::Up, ScanDepth::THREAT),
        vec![Cell::new(3, 6), Cell::new(0, 6)]
    );
}

/// Test that a scan from an off-grid origin yields nothing.
#[test]
fn test_scan_from_out_of_bounds() {
    let board = Board::new();
    assert!(reached(&board, (9, 9), Direction::Up, ScanDepth::MILL).is_empty());
}

/// Test that scan_until stops before the first matching cell.
#[test]
fn test_scan_until_stops_before_match() {
    let mut board = Board::new();
    board.set(Cell::new(2, 3), CellState::Occupied(Player::Black));

    let origin = Cell::new(0, 3);
    let cells: Vec<_> = scan_until(&board, origin, Direction::Down, ScanDepth::MILL, |_, state| {
        state.is_owned_by(Player::Black)
    })
    .map(|(cell, _)| cell)
    .collect();
    assert_eq!(cells, vec![Cell::new(1, 3)]);
}

/// Test neighbour lookups in Up, Down, Left, Right order.
#[test]
fn test_neighbours() {
    let board = Board::new();
    assert_eq!(
        neighbours(&board, Cell::new(0, 0)).to_vec(),
        vec![Cell::new(3, 0), Cell::new(0, 3)]
    );
    assert_eq!(
        neighbours(&board, Cell::new(1, 3)).to_vec(),
        vec![Cell::new(0, 3), Cell::new(2, 3), Cell::new(1, 1), Cell::new(1, 5)]
    );
    assert_eq!(neighbour(&board, Cell::new(3, 4), Direction::Left), None);
}

/// Test that occupancy does not change what a scan reaches.
#[test]
fn test_scan_sees_occupied_cells() {
    let mut board = Board::new();
    board.set(Cell::new(0, 3), CellState::Occupied(Player::Black));

    let hits: Vec<_> = scan(&board, Cell::new(0, 0), Direction::Right, ScanDepth::MOVE).collect();
    assert_eq!(hits, vec![(Cell::new(0, 3), CellState::Occupied(Player::Black))]);
}

// =============================================================================
// Geometry Tests
// =============================================================================

/// Test that the board draws the standard 32 segments.
#[test]
fn test_connection_count() {
    let board = Board::new();
    let segments = connections(&board);
    assert_eq!(segments.len(), 32);
    assert!(segments.contains(&(Cell::new(0, 0), Cell::new(0, 3))));
    assert!(segments.contains(&(Cell::new(1, 1), Cell::new(3, 1))));
    assert!(!segments.iter().any(|&(a, b)| a == Cell::CENTER || b == Cell::CENTER));
}

/// Test that every point is an endpoint of two to four segments.
#[test]
fn test_connection_degrees() {
    let board = Board::new();
    let segments = connections(&board);
    for node in NODES {
        let degree = segments.iter().filter(|&&(a, b)| a == node || b == node).count();
        assert!((2..=4).contains(&degree), "{node} has degree {degree}");
    }
}

/// Test hit-test mapping over raw signed coordinates.
#[test]
fn test_node_id_mapping() {
    assert_eq!(node_id(0, 0).map(NodeId::index), Some(0));
    assert_eq!(node_id(6, 6).map(NodeId::index), Some(23));
    assert_eq!(node_id(6, 6), NodeId::try_from(23u8).ok());
    assert_eq!(node_id(3, 3), None);
    assert_eq!(node_id(0, 1), None);
    assert_eq!(node_id(-1, 0), None);
    assert_eq!(node_id(3, 100), None);
}

/// Test ring classification.
#[test]
fn test_ring_of() {
    assert_eq!(ring_of(Cell::new(0, 0)), Some(Ring::Outer));
    assert_eq!(ring_of(Cell::new(3, 0)), Some(Ring::Outer));
    assert_eq!(ring_of(Cell::new(1, 1)), Some(Ring::Middle));
    assert_eq!(ring_of(Cell::new(3, 1)), Some(Ring::Middle));
    assert_eq!(ring_of(Cell::new(2, 3)), Some(Ring::Inner));
    assert_eq!(ring_of(Cell::new(4, 4)), Some(Ring::Inner));
    assert_eq!(ring_of(Cell::CENTER), None);
    assert_eq!(ring_of(Cell::new(0, 1)), None);
}

/// Test that each ring holds eight points.
#[test]
fn test_ring_sizes() {
    for ring in [Ring::Outer, Ring::Middle, Ring::Inner] {
        let count = NODES.iter().filter(|&&cell| ring_of(cell) == Some(ring)).count();
        assert_eq!(count, 8, "{ring:?}");
    }
}
