//! Fixed board geometry for rendering and hit-testing.
//!
//! The core owns the logical coordinate system. Renderers place the 24 ring
//! points from [`NODES`], draw the segments from [`connections`], and resolve a
//! pointer position to a point through [`node_id`].

use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::scan::neighbour;
use crate::core::{Cell, Direction, BOARD_SIZE};

/// Number of playable points.
pub const NODE_COUNT: usize = 24;

/// The playable points in row-major order. `NODES[id]` is the cell for `NodeId(id)`.
#[rustfmt::skip]
pub const NODES: [Cell; NODE_COUNT] = [
    Cell::new(0, 0), Cell::new(0, 3), Cell::new(0, 6),
    Cell::new(1, 1), Cell::new(1, 3), Cell::new(1, 5),
    Cell::new(2, 2), Cell::new(2, 3), Cell::new(2, 4),
    Cell::new(3, 0), Cell::new(3, 1), Cell::new(3, 2),
    Cell::new(3, 4), Cell::new(3, 5), Cell::new(3, 6),
    Cell::new(4, 2), Cell::new(4, 3), Cell::new(4, 4),
    Cell::new(5, 1), Cell::new(5, 3), Cell::new(5, 5),
    Cell::new(6, 0), Cell::new(6, 3), Cell::new(6, 6),
];

/// Canonical identity of a playable point, always below [`NODE_COUNT`].
///
/// Built through [`node_id`] or `NodeId::try_from(index)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct NodeId(u8);

impl NodeId {
    /// Position in [`NODES`].
    #[inline]
    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }

    /// The grid cell of this point.
    #[must_use]
    pub fn cell(self) -> Cell {
        NODES[usize::from(self.0)]
    }
}

impl TryFrom<u8> for NodeId {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if usize::from(index) < NODE_COUNT {
            Ok(NodeId(index))
        } else {
            Err(format!("node id {index} is not below {NODE_COUNT}"))
        }
    }
}

impl From<NodeId> for u8 {
    fn from(id: NodeId) -> u8 {
        id.0
    }
}

/// Which of the three concentric squares a point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ring {
    Outer,
    Middle,
    Inner,
}

/// Map a logical coordinate to its point, `None` for anything that is not one.
///
/// Pure and total over all integers, so it can be fed raw rounded pointer
/// coordinates.
#[must_use]
pub fn node_id(row: i32, col: i32) -> Option<NodeId> {
    let cell = Cell::from_signed(row, col)?;
    NODES
        .iter()
        .position(|&node| node == cell)
        .map(|idx| NodeId(idx as u8))
}

/// The square a point lies on.
#[must_use]
pub fn ring_of(cell: Cell) -> Option<Ring> {
    node_id(i32::from(cell.row), i32::from(cell.col))?;
    let last = BOARD_SIZE - 1;
    let edge_distance = cell.row.min(cell.col).min(last - cell.row).min(last - cell.col);
    match edge_distance {
        0 => Some(Ring::Outer),
        1 => Some(Ring::Middle),
        _ => Some(Ring::Inner),
    }
}

/// Every drawn line segment between neighbouring points, each listed once
/// with the lower cell first.
#[must_use]
pub fn connections(board: &Board) -> Vec<(Cell, Cell)> {
    NODES
        .iter()
        .flat_map(|&from| {
            Direction::FORWARD
                .into_iter()
                .filter_map(move |dir| neighbour(board, from, dir).map(|to| (from, to)))
        })
        .collect()
}
