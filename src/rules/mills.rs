//! Mill detection and threat scanning.
//!
//! A mill is three of one player's pieces on one line of the board. Each
//! player keeps an `ActiveMillSet` of the mills currently standing; a mill
//! scores only on the scan where it first enters the set, and leaves the set
//! as soon as any of its cells stops holding that player's piece. Breaking a
//! mill and re-forming it therefore scores again, while leaving it standing
//! never does.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{neighbour, scan, Board, ScanDepth};
use crate::core::{Cell, Direction, Player, PlayerMap};

/// Three collinear cells, stored in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Mill([Cell; 3]);

impl Mill {
    /// Build the canonical triple; the order of `cells` does not matter.
    #[must_use]
    pub fn new(mut cells: [Cell; 3]) -> Self {
        cells.sort();
        Self(cells)
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; 3] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// Whether all three cells still hold `player`'s pieces.
    #[must_use]
    pub fn is_intact(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|&cell| board.try_get(cell).is_some_and(|state| state.is_owned_by(player)))
    }
}

impl std::fmt::Display for Mill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{a} {b} {c}]")
    }
}

/// Mills currently standing for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveMillSet {
    mills: OrdSet<Mill>,
}

impl ActiveMillSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, mill: &Mill) -> bool {
        self.mills.contains(mill)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mill> {
        self.mills.iter()
    }

    /// Drop every mill that is no longer intact. Returns the dropped mills.
    ///
    /// Validity is rebuilt from the board each time rather than tracked per
    /// move, so no sequence of moves and removals can leave a stale entry.
    pub fn prune(&mut self, board: &Board, player: Player) -> Vec<Mill> {
        let broken: Vec<Mill> = self
            .mills
            .iter()
            .filter(|mill| !mill.is_intact(board, player))
            .copied()
            .collect();
        for mill in &broken {
            self.mills.remove(mill);
        }
        broken
    }

    /// Prune, then add every standing mill not already tracked.
    /// Returns the newly formed mills in scan order.
    pub fn update(&mut self, board: &Board, player: Player) -> SmallVec<[Mill; 2]> {
        self.prune(board, player);
        find_mills(board, player)
            .into_iter()
            .filter(|mill| self.mills.insert(*mill).is_none())
            .collect()
    }
}

/// Both players' active mill sets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MillTracker {
    sets: PlayerMap<ActiveMillSet>,
}

impl MillTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A player's active mills.
    #[must_use]
    pub fn get(&self, player: Player) -> &ActiveMillSet {
        &self.sets[player]
    }

    /// Rebuild after a board mutation by `mover`.
    ///
    /// Both sets are pruned first, since a capture or a vacated cell can break
    /// either player's mills; only the mover's new mills are detected and
    /// returned.
    pub fn refresh(&mut self, board: &Board, mover: Player) -> SmallVec<[Mill; 2]> {
        for (player, set) in self.sets.iter_mut() {
            set.prune(board, player);
        }
        self.sets[mover].update(board, mover)
    }

    /// Prune both sets without detecting anything new.
    pub fn prune_all(&mut self, board: &Board) {
        for (player, set) in self.sets.iter_mut() {
            set.prune(board, player);
        }
    }
}

/// Every mill `player` currently has on the board, in scan order.
///
/// Lines are walked only downwards and rightwards from each piece so each
/// physical mill is found once, from its first cell.
#[must_use]
pub fn find_mills(board: &Board, player: Player) -> Vec<Mill> {
    let mut mills = Vec::new();
    for origin in board.pieces(player) {
        for direction in Direction::FORWARD {
            let run: SmallVec<[Cell; 2]> = scan(board, origin, direction, ScanDepth::MILL)
                .take_while(|&(_, state)| state.is_owned_by(player))
                .map(|(cell, _)| cell)
                .take(2)
                .collect();
            if let [second, third] = run[..] {
                mills.push(Mill::new([origin, second, third]));
            }
        }
    }
    mills
}

/// Whether `attacker` would complete a mill by occupying the empty `cell`.
///
/// True when, along one axis, the attacker holds both other points of the
/// line: either the next two points in one direction (the cell ends the line)
/// or the nearest point on each side (the cell is its middle).
#[must_use]
pub fn is_threat(board: &Board, cell: Cell, attacker: Player) -> bool {
    if !board.is_vacant(cell) {
        return false;
    }

    let owned = |c: Option<Cell>| c.is_some_and(|c| board.get(c).is_owned_by(attacker));

    let ends_line = Direction::ALL.into_iter().any(|direction| {
        scan(board, cell, direction, ScanDepth::THREAT)
            .take_while(|&(_, state)| state.is_owned_by(attacker))
            .count()
            >= 2
    });

    ends_line
        || Direction::FORWARD.into_iter().any(|direction| {
            owned(neighbour(board, cell, direction))
                && owned(neighbour(board, cell, direction.reverse()))
        })
}

/// Empty cells where `attacker` is one piece from a mill, row-major.
///
/// Recomputed from scratch on every call.
#[must_use]
pub fn find_threats(board: &Board, attacker: Player) -> Vec<Cell> {
    board
        .empty_cells()
        .filter(|&cell| is_threat(board, cell, attacker))
        .collect()
}
