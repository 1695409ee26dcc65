//! The 7x7 board model.
//!
//! Three concentric squares of eight points each are laid onto a 7x7 grid.
//! Grid cells that are not points are `Blocked` for the life of the board; the
//! centre (3,3) is not a point either and is excluded from play. The board is
//! pure storage: it answers bounds and blocked queries but never judges
//! whether a move is legal.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, CellState, Player, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// Board points (`o`) and blocked cells (`x`), row by row.
const LAYOUT: [&[u8; SIZE]; SIZE] = [
    b"oxxoxxo",
    b"xoxoxox",
    b"xxoooxx",
    b"oooxooo",
    b"xxoooxx",
    b"xoxoxox",
    b"oxxoxxo",
];

/// Cell occupancy for one game.
///
/// This is the single source of truth for where pieces are; per-player piece
/// lists are derived from it on demand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[CellState; SIZE]; SIZE],
}

impl Board {
    /// Create an empty board with the fixed blocked pattern.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [[CellState::Blocked; SIZE]; SIZE];
        for (row, line) in LAYOUT.iter().enumerate() {
            for (col, &mark) in line.iter().enumerate() {
                if mark == b'o' {
                    cells[row][col] = CellState::Empty;
                }
            }
        }
        Self { cells }
    }

    /// Get a cell's state.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is off the grid; use [`Board::try_get`] for
    /// unchecked input.
    #[inline]
    #[must_use]
    pub fn get(&self, cell: Cell) -> CellState {
        self.cells[cell.row as usize][cell.col as usize]
    }

    /// Get a cell's state, `None` when off the grid.
    #[inline]
    #[must_use]
    pub fn try_get(&self, cell: Cell) -> Option<CellState> {
        cell.in_bounds().then(|| self.get(cell))
    }

    /// Overwrite a playable cell.
    ///
    /// Only `Empty` and `Occupied` may be written; the blocked pattern is fixed.
    #[inline]
    pub fn set(&mut self, cell: Cell, state: CellState) {
        debug_assert!(self.is_playable(cell), "write to non-playable cell {cell}");
        debug_assert!(!state.is_blocked(), "cannot block {cell} after construction");
        self.cells[cell.row as usize][cell.col as usize] = state;
    }

    /// Whether the cell is on the grid and blocked by the pattern.
    #[inline]
    #[must_use]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        cell.in_bounds() && self.get(cell).is_blocked()
    }

    /// Whether a piece may ever stand on this cell.
    #[inline]
    #[must_use]
    pub fn is_playable(&self, cell: Cell) -> bool {
        cell.in_bounds() && !cell.is_center() && !self.get(cell).is_blocked()
    }

    /// Whether the cell is playable and currently empty.
    #[inline]
    #[must_use]
    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.is_playable(cell) && self.get(cell).is_empty()
    }

    /// All playable cells in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell::new(row, col)))
            .filter(|&cell| self.is_playable(cell))
    }

    /// Empty playable cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.points().filter(|&cell| self.get(cell).is_empty())
    }

    /// A player's occupied cells in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Cell> + '_ {
        self.points().filter(move |&cell| self.get(cell).is_owned_by(player))
    }

    /// Number of a player's pieces on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> u8 {
        self.pieces(player).count() as u8
    }

    /// Occupancy plus per-player piece positions, for renderers.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self.cells,
            white: self.pieces(Player::White).collect(),
            black: self.pieces(Player::Black).collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row} ")?;
            for col in 0..BOARD_SIZE {
                let cell = Cell::new(row, col);
                let glyph = match self.get(cell) {
                    CellState::Occupied(Player::White) => 'W',
                    CellState::Occupied(Player::Black) => 'B',
                    CellState::Empty => '+',
                    CellState::Blocked => ' ',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// What a rendering collaborator needs after every mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Full occupancy grid, indexed `[row][col]`.
    pub cells: [[CellState; SIZE]; SIZE],
    /// White piece positions, row-major.
    pub white: Vec<Cell>,
    /// Black piece positions, row-major.
    pub black: Vec<Cell>,
}

impl BoardSnapshot {
    /// Piece positions for one player.
    #[must_use]
    pub fn pieces(&self, player: Player) -> &[Cell] {
        match player {
            Player::White => &self.white,
            Player::Black => &self.black,
        }
    }
}
