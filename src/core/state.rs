//! Game state.
//!
//! ## PlayerState
//!
//! Per-player counters that the board cannot answer: pieces placed so far and
//! the score. The on-board count is always read from the board.
//!
//! ## GameState
//!
//! The one value holding everything a game mutates:
//! - Board occupancy
//! - Player counters
//! - Both players' active mills
//! - Ply history
//! - RNG
//!
//! Cloning is cheap: the board is a fixed array and the collections are `im`
//! persistent structures.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::PlyRecord;
use super::config::GameConfig;
use super::player::{Player, PlayerMap};
use super::rng::GameRng;
use crate::board::Board;
use crate::rules::{MillTracker, Phase};

/// Counters for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Pieces brought onto the board from reserve.
    pub placed: u8,

    /// Mills completed.
    pub score: u32,
}

/// Complete mutable game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Cell occupancy, the single source of truth for piece positions.
    pub board: Board,

    /// Per-player counters.
    pub players: PlayerMap<PlayerState>,

    /// Mills currently standing, per player.
    pub mills: MillTracker,

    /// Every ply applied so far, oldest first.
    pub history: Vector<PlyRecord>,

    /// Deterministic RNG for AI choices.
    pub rng: GameRng,
}

impl GameState {
    /// Create the starting position.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            players: PlayerMap::with_default(),
            mills: MillTracker::new(),
            history: Vector::new(),
            rng: GameRng::new(seed),
        }
    }

    // === Counts ===

    /// Pieces on the board.
    #[must_use]
    pub fn on_board(&self, player: Player) -> u8 {
        self.board.count(player)
    }

    /// Pieces not yet placed.
    #[must_use]
    pub fn reserve(&self, player: Player, config: &GameConfig) -> u8 {
        config.pieces_per_player.saturating_sub(self.players[player].placed)
    }

    /// Pieces still in the game, on the board or in reserve.
    #[must_use]
    pub fn in_play(&self, player: Player, config: &GameConfig) -> u8 {
        self.on_board(player) + self.reserve(player, config)
    }

    // === Derived ===

    /// The player's current phase.
    #[must_use]
    pub fn phase(&self, player: Player, config: &GameConfig) -> Phase {
        Phase::derive(self.players[player].placed, self.on_board(player), config)
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.players[player].score
    }

    /// Sequence number for the next recorded ply.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }

    /// The most recent ply, if any.
    #[must_use]
    pub fn last_ply(&self) -> Option<&PlyRecord> {
        self.history.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, CellState, Ply};

    #[test]
    fn test_new_state() {
        let config = GameConfig::default();
        let state = GameState::new(42);

        for player in Player::ALL {
            assert_eq!(state.on_board(player), 0);
            assert_eq!(state.reserve(player, &config), 9);
            assert_eq!(state.in_play(player, &config), 9);
            assert_eq!(state.score(player), 0);
            assert_eq!(state.phase(player, &config), Phase::Placement);
        }
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_counts_follow_board() {
        let config = GameConfig::default();
        let mut state = GameState::new(42);
        state.board.set(Cell::new(0, 0), CellState::Occupied(Player::White));
        state.players[Player::White].placed = 1;

        assert_eq!(state.on_board(Player::White), 1);
        assert_eq!(state.reserve(Player::White, &config), 8);
        assert_eq!(state.in_play(Player::White, &config), 9);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new(42);
        let snapshot = state.clone();

        state.board.set(Cell::new(3, 0), CellState::Occupied(Player::Black));
        let ply = Ply::Place { to: Cell::new(3, 0) };
        state.history.push_back(PlyRecord::new(Player::Black, ply, 0));

        assert_eq!(snapshot.on_board(Player::Black), 0);
        assert!(snapshot.history.is_empty());
        assert_eq!(state.next_sequence(), 1);
    }
}
