//! Directional scanning over the board.
//!
//! Every adjacency question in the game (where a piece may step, which empty
//! points the opponent threatens, which pieces form a mill) is answered by
//! walking outward from a cell in one direction. The walk has a step budget,
//! its depth. Blocked cells are see-through: stepping over one costs a step
//! but grants one more, so the reach grows by exactly the number of blocked
//! cells crossed. Leaving the grid or reaching the excluded centre ends the
//! line.
//!
//! ```
//! use rust_mill::board::{scan, Board, ScanDepth};
//! use rust_mill::core::{Cell, Direction};
//!
//! let board = Board::new();
//! let reached: Vec<_> = scan(&board, Cell::new(0, 0), Direction::Right, ScanDepth::MOVE)
//!     .map(|(cell, _)| cell)
//!     .collect();
//! assert_eq!(reached, vec![Cell::new(0, 3)]);
//! ```

use smallvec::SmallVec;

use super::grid::Board;
use crate::core::{Cell, CellState, Direction};

/// Step budget for a scan, before blocked-cell extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanDepth(pub u8);

impl ScanDepth {
    /// Ordinary movement: the next point along the line.
    pub const MOVE: ScanDepth = ScanDepth(1);
    /// Threat detection: the next two points.
    pub const THREAT: ScanDepth = ScanDepth(2);
    /// Mill detection.
    pub const MILL: ScanDepth = ScanDepth(3);
}

/// Iterator over the playable cells reached from an origin.
///
/// Yields each reached cell with its current state, nearest first. The origin
/// itself is never yielded.
#[derive(Clone, Debug)]
pub struct Scan<'a> {
    board: &'a Board,
    at: Cell,
    direction: Direction,
    taken: u8,
    budget: u8,
    done: bool,
}

impl Iterator for Scan<'_> {
    type Item = (Cell, CellState);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done && self.taken < self.budget {
            self.taken += 1;
            let next = match self.at.step(self.direction) {
                Some(cell) if !cell.is_center() => cell,
                _ => break,
            };
            self.at = next;

            let state = self.board.get(next);
            if state.is_blocked() {
                self.budget = self.budget.saturating_add(1);
                continue;
            }
            return Some((next, state));
        }
        self.done = true;
        None
    }
}

impl std::iter::FusedIterator for Scan<'_> {}

/// Scan outward from `origin` in `direction` with the given depth.
#[must_use]
pub fn scan(board: &Board, origin: Cell, direction: Direction, depth: ScanDepth) -> Scan<'_> {
    Scan {
        board,
        at: origin,
        direction,
        taken: 0,
        budget: depth.0,
        done: !origin.in_bounds(),
    }
}

/// Scan until `stop` returns true for a reached cell; the stopping cell is
/// not included.
pub fn scan_until<'a, F>(
    board: &'a Board,
    origin: Cell,
    direction: Direction,
    depth: ScanDepth,
    mut stop: F,
) -> impl Iterator<Item = (Cell, CellState)> + 'a
where
    F: FnMut(Cell, CellState) -> bool + 'a,
{
    scan(board, origin, direction, depth).take_while(move |&(cell, state)| !stop(cell, state))
}

/// The nearest playable cell in `direction`, whatever its occupancy.
#[must_use]
pub fn neighbour(board: &Board, origin: Cell, direction: Direction) -> Option<Cell> {
    scan(board, origin, direction, ScanDepth::MOVE)
        .next()
        .map(|(cell, _)| cell)
}

/// The playable cells one step from `origin` in any direction.
#[must_use]
pub fn neighbours(board: &Board, origin: Cell) -> SmallVec<[Cell; 4]> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| neighbour(board, origin, dir))
        .collect()
}
