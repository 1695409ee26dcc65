//! Legal ply generation.
//!
//! The mover's phase picks the generator:
//! - Placement: every empty point, while reserve lasts
//! - Moving: each piece to the empty points one scan step away
//! - Flying: each piece to every empty point
//!
//! Plies come out in a fixed order (origins row-major, then directions in
//! `Direction::ALL` order, then destinations row-major) so that "first legal
//! ply matching X" is reproducible.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::{neighbour, Board};
use crate::core::{Cell, Direction, GameConfig, GameState, InvalidReason, MoveError, Player, Ply};

use super::phase::Phase;

/// Step destinations, each mapped to the origins that reach it.
pub type MoveMap = FxHashMap<Cell, SmallVec<[Cell; 4]>>;

/// Empty cells one scan step from `from`.
pub fn step_destinations(board: &Board, from: Cell) -> impl Iterator<Item = Cell> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| neighbour(board, from, dir))
        .filter(move |&to| board.get(to).is_empty())
}

/// Whether a piece at `from` may step to `to`.
#[must_use]
pub fn can_step(board: &Board, from: Cell, to: Cell) -> bool {
    step_destinations(board, from).any(|cell| cell == to)
}

/// Every step destination for `player`, with the origins that reach it.
#[must_use]
pub fn step_map(board: &Board, player: Player) -> MoveMap {
    let mut map = MoveMap::default();
    for from in board.pieces(player) {
        for to in step_destinations(board, from) {
            map.entry(to).or_default().push(from);
        }
    }
    map
}

/// Every legal ply for `player` in the current position.
///
/// An empty result outside placement means the player is blocked in.
#[must_use]
pub fn legal_plies(state: &GameState, player: Player, config: &GameConfig) -> Vec<Ply> {
    let board = &state.board;
    match state.phase(player, config) {
        Phase::Placement => board.empty_cells().map(|to| Ply::Place { to }).collect(),
        Phase::Moving => board
            .pieces(player)
            .flat_map(|from| step_destinations(board, from).map(move |to| Ply::Step { from, to }))
            .collect(),
        Phase::Flying => board
            .pieces(player)
            .flat_map(|from| board.empty_cells().map(move |to| Ply::Fly { from, to }))
            .collect(),
    }
}

/// Whether `player` has at least one legal ply.
#[must_use]
pub fn has_legal_ply(state: &GameState, player: Player, config: &GameConfig) -> bool {
    let board = &state.board;
    match state.phase(player, config) {
        Phase::Placement => board.empty_cells().next().is_some(),
        Phase::Moving => board
            .pieces(player)
            .any(|from| step_destinations(board, from).next().is_some()),
        Phase::Flying => {
            board.pieces(player).next().is_some() && board.empty_cells().next().is_some()
        }
    }
}

/// Classify a cell the mover wants to put a piece on.
pub fn check_destination(board: &Board, to: Cell) -> Result<(), MoveError> {
    match board.try_get(to) {
        None => Err(MoveError::invalid(to, InvalidReason::OutOfBounds)),
        Some(_) if !board.is_playable(to) => Err(MoveError::invalid(to, InvalidReason::Blocked)),
        Some(state) if !state.is_empty() => Err(MoveError::invalid(to, InvalidReason::Occupied)),
        Some(_) => Ok(()),
    }
}

/// Classify a cell the mover wants to pick a piece up from.
pub fn check_origin(board: &Board, player: Player, from: Cell) -> Result<(), MoveError> {
    match board.try_get(from) {
        None => Err(MoveError::invalid(from, InvalidReason::OutOfBounds)),
        Some(_) if !board.is_playable(from) => {
            Err(MoveError::invalid(from, InvalidReason::Blocked))
        }
        Some(state) if !state.is_owned_by(player) => {
            Err(MoveError::invalid(from, InvalidReason::NotOwnPiece))
        }
        Some(_) => Ok(()),
    }
}

/// Build and validate the ply that moves `player`'s piece to `to`.
///
/// `from` is the selected origin, required outside placement and ignored
/// during it. Without one, a vacant `to` reads as a placement attempt after
/// the reserve ran out.
pub fn resolve_ply(
    state: &GameState,
    player: Player,
    from: Option<Cell>,
    to: Cell,
    config: &GameConfig,
) -> Result<Ply, MoveError> {
    let board = &state.board;
    let phase = state.phase(player, config);

    if phase == Phase::Placement {
        check_destination(board, to)?;
        return Ok(Ply::Place { to });
    }

    let from = match from {
        Some(from) => from,
        None if board.is_vacant(to) => return Err(MoveError::ReserveExhausted),
        None => return Err(MoveError::NoOriginSelected),
    };
    check_origin(board, player, from)?;
    check_destination(board, to)?;

    match phase {
        Phase::Flying => Ok(Ply::Fly { from, to }),
        _ if can_step(board, from, to) => Ok(Ply::Step { from, to }),
        _ => Err(MoveError::invalid(to, InvalidReason::Unreachable)),
    }
}
