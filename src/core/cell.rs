//! Logical board coordinates and cell contents.
//!
//! A `Cell` is a `(row, col)` coordinate on the 7x7 logical grid. Cells carry
//! no occupancy; the `Board` maps each cell to a `CellState`. Coordinates are
//! not validated on construction so that input collaborators can hand over
//! whatever the pointer resolved to and get a precise rejection back.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Side length of the logical grid.
pub const BOARD_SIZE: u8 = 7;

/// Logical coordinate on the 7x7 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    /// The excluded centre of the board.
    pub const CENTER: Cell = Cell::new(3, 3);

    #[inline]
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a cell from signed coordinates, `None` when off the grid.
    #[inline]
    #[must_use]
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Whether the coordinate lies on the 7x7 grid.
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    #[inline]
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == Self::CENTER.row && self.col == Self::CENTER.col
    }

    /// Row-major index into a 7x7 array.
    #[inline]
    #[must_use]
    pub const fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// The neighbouring coordinate one grid step away, if still on the grid.
    #[inline]
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        Cell::from_signed(i32::from(self.row) + dr, i32::from(self.col) + dc)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Not a board node. Fixed at construction.
    Blocked,
    Empty,
    Occupied(Player),
}

impl CellState {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_blocked(self) -> bool {
        matches!(self, CellState::Blocked)
    }

    /// The owning player, if a piece sits here.
    #[inline]
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            CellState::Occupied(player) => Some(player),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == CellState::Occupied(player)
    }
}

/// The four orthogonal scan directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The two forward directions used for mill detection, so that each
    /// physical line is only walked from its first node.
    pub const FORWARD: [Direction; 2] = [Direction::Down, Direction::Right];

    /// Row and column delta for one step.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
