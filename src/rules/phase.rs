//! Phase derivation.
//!
//! A player's phase is never stored. It follows from how many pieces they
//! have placed and how many remain on the board, so it moves back to
//! `Moving` if the on-board count ever climbs to the flying threshold again.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Which kind of ply a player makes next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pieces remain in reserve; each ply places one.
    Placement,
    /// Pieces step to an adjacent empty point.
    Moving,
    /// Pieces jump to any empty point.
    Flying,
}

impl Phase {
    /// Derive the phase from a player's counts.
    ///
    /// Placement comes first: a player still holding reserve pieces places
    /// them even if captures have left few on the board.
    #[must_use]
    pub fn derive(placed: u8, on_board: u8, config: &GameConfig) -> Phase {
        if placed < config.pieces_per_player {
            Phase::Placement
        } else if on_board < config.flying_threshold {
            Phase::Flying
        } else {
            Phase::Moving
        }
    }

    /// Whether plies in this phase vacate an origin cell.
    #[must_use]
    pub fn is_movement(self) -> bool {
        !matches!(self, Phase::Placement)
    }

    /// Phase number as shown to players.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Phase::Placement => 1,
            Phase::Moving => 2,
            Phase::Flying => 3,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placement => write!(f, "placement"),
            Phase::Moving => write!(f, "moving"),
            Phase::Flying => write!(f, "flying"),
        }
    }
}
