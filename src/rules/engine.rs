//! Rules engine trait and the mill game's rules.
//!
//! `RulesEngine` is the seam between turn sequencing and rule logic:
//! - What plies are legal
//! - How a ply and a capture modify state
//! - Win/loss conditions
//!
//! Implementations never decide who moves next or whether a capture needs
//! input; that belongs to the turn controller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{Cell, CellState, GameConfig, GameState, Player, Ply, PlyRecord};

use super::mills::Mill;
use super::movegen::{has_legal_ply, legal_plies};

/// How the losing side lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// Too few pieces left on the board and in reserve.
    PiecesExhausted,
    /// No legal ply on their turn to move.
    NoLegalMoves,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    pub reason: LossReason,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }

    #[must_use]
    pub fn loser(&self) -> Player {
        self.winner.opponent()
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loser = self.loser();
        match self.reason {
            LossReason::PiecesExhausted => {
                write!(f, "{} wins: {loser} has too few pieces left", self.winner)
            }
            LossReason::NoLegalMoves => {
                write!(f, "{} wins: {loser} has no legal moves", self.winner)
            }
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_plies`: Return empty if the player can't move
/// - `apply_ply`: Assumes the ply is legal; must be deterministic
/// - `remove_piece`: Assumes the cell holds an opponent piece
/// - `is_terminal`: Return `None` if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Get legal plies for a player.
    fn legal_plies(&self, state: &GameState, player: Player) -> Vec<Ply>;

    /// Apply a ply, score any mills it formed and return them.
    ///
    /// Each returned mill has earned its player one capture.
    fn apply_ply(&self, state: &mut GameState, player: Player, ply: Ply) -> SmallVec<[Mill; 2]>;

    /// Remove an opponent piece as a capture by `capturer`.
    fn remove_piece(&self, state: &mut GameState, capturer: Player, cell: Cell);

    /// Loss by material, checked for both players regardless of turn.
    fn material_loss(&self, state: &GameState) -> Option<GameResult>;

    /// Loss by blockade of the side about to move.
    fn blockade(&self, state: &GameState, to_move: Player) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check if the game is over with `to_move` next to act.
    fn is_terminal(&self, state: &GameState, to_move: Player) -> Option<GameResult> {
        self.material_loss(state).or_else(|| self.blockade(state, to_move))
    }
}

/// Standard mill rules, parameterized by `GameConfig`.
#[derive(Clone, Debug, Default)]
pub struct MillRules {
    config: GameConfig,
}

impl MillRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for MillRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_plies(&self, state: &GameState, player: Player) -> Vec<Ply> {
        legal_plies(state, player, &self.config)
    }

    fn apply_ply(&self, state: &mut GameState, player: Player, ply: Ply) -> SmallVec<[Mill; 2]> {
        debug_assert!(state.board.is_vacant(ply.destination()), "{ply} lands on an occupied cell");

        if let Some(from) = ply.origin() {
            debug_assert!(state.board.get(from).is_owned_by(player), "{ply} moves a foreign piece");
            state.board.set(from, CellState::Empty);
        } else {
            state.players[player].placed += 1;
        }
        state.board.set(ply.destination(), CellState::Occupied(player));

        let sequence = state.next_sequence();
        state.history.push_back(PlyRecord::new(player, ply, sequence));
        debug!(%player, %ply, sequence, "ply applied");

        let formed = state.mills.refresh(&state.board, player);
        for mill in &formed {
            info!(%player, %mill, "mill formed");
        }
        state.players[player].score += formed.len() as u32;
        formed
    }

    fn remove_piece(&self, state: &mut GameState, capturer: Player, cell: Cell) {
        debug_assert!(
            state.board.get(cell).is_owned_by(capturer.opponent()),
            "capture at {cell} is not an opponent piece"
        );
        state.board.set(cell, CellState::Empty);
        state.mills.prune_all(&state.board);
        if let Some(record) = state.history.back_mut() {
            record.captured.push(cell);
        }
        info!(%capturer, %cell, "piece removed");
    }

    fn material_loss(&self, state: &GameState) -> Option<GameResult> {
        Player::ALL
            .into_iter()
            .find(|&player| state.in_play(player, &self.config) <= self.config.losing_count)
            .map(|loser| GameResult {
                winner: loser.opponent(),
                reason: LossReason::PiecesExhausted,
            })
    }

    fn blockade(&self, state: &GameState, to_move: Player) -> Option<GameResult> {
        let movement = state.phase(to_move, &self.config).is_movement();
        (movement && !has_legal_ply(state, to_move, &self.config)).then(|| GameResult {
            winner: to_move.opponent(),
            reason: LossReason::NoLegalMoves,
        })
    }
}
