//! Ply representation.
//!
//! A ply is one side's move: a placement from reserve, a step to an adjacent
//! point, or a flight to any empty point. Captures are not plies; they are
//! recorded alongside the ply that earned them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use super::player::Player;

/// One side's move.
///
/// ## Example
///
/// ```
/// use rust_mill::core::{Cell, Ply};
///
/// let ply = Ply::Step { from: Cell::new(0, 0), to: Cell::new(0, 3) };
/// assert_eq!(ply.origin(), Some(Cell::new(0, 0)));
/// assert_eq!(ply.destination(), Cell::new(0, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ply {
    /// Bring a reserve piece onto an empty point.
    Place { to: Cell },
    /// Move a piece to an adjacent empty point.
    Step { from: Cell, to: Cell },
    /// Move a piece to any empty point.
    Fly { from: Cell, to: Cell },
}

impl Ply {
    /// The vacated cell, `None` for placements.
    #[must_use]
    pub fn origin(self) -> Option<Cell> {
        match self {
            Ply::Place { .. } => None,
            Ply::Step { from, .. } | Ply::Fly { from, .. } => Some(from),
        }
    }

    /// The cell the piece ends on.
    #[must_use]
    pub fn destination(self) -> Cell {
        match self {
            Ply::Place { to } | Ply::Step { to, .. } | Ply::Fly { to, .. } => to,
        }
    }
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ply::Place { to } => write!(f, "place {to}"),
            Ply::Step { from, to } => write!(f, "move {from} -> {to}"),
            Ply::Fly { from, to } => write!(f, "fly {from} -> {to}"),
        }
    }
}

/// A recorded ply with the captures it earned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    /// The player who moved.
    pub player: Player,

    /// The ply taken.
    pub ply: Ply,

    /// Opponent pieces removed because of mills this ply formed.
    /// Rarely more than one, so kept inline.
    pub captured: SmallVec<[Cell; 2]>,

    /// Position in the game's ply sequence, starting at 0.
    pub sequence: u32,
}

impl PlyRecord {
    /// Create a record with no captures yet.
    #[must_use]
    pub fn new(player: Player, ply: Ply, sequence: u32) -> Self {
        Self {
            player,
            ply,
            captured: SmallVec::new(),
            sequence,
        }
    }
}
