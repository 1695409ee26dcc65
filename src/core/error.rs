//! Error types.
//!
//! `MoveError` is what the input entry points hand back when an attempt is
//! rejected. A rejection never mutates game state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::Cell;

/// Why a target cell was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidReason {
    OutOfBounds,
    /// A pattern-blocked cell or the excluded centre.
    Blocked,
    Occupied,
    /// Empty, but not adjacent to the selected origin.
    Unreachable,
    NotOwnPiece,
    NotOpponentPiece,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            InvalidReason::OutOfBounds => "outside the board",
            InvalidReason::Blocked => "not a board point",
            InvalidReason::Occupied => "already occupied",
            InvalidReason::Unreachable => "not reachable from the selected piece",
            InvalidReason::NotOwnPiece => "not one of your pieces",
            InvalidReason::NotOpponentPiece => "not an opponent piece",
        };
        f.write_str(text)
    }
}

/// Rejection reasons for human input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid target {cell}: {reason}")]
    InvalidTarget { cell: Cell, reason: InvalidReason },

    #[error("select a piece to move first")]
    NoOriginSelected,

    #[error("pieces remain in reserve and must be placed first")]
    PlacementPending,

    #[error("all pieces have already been placed")]
    ReserveExhausted,

    #[error("it is not the human's turn")]
    NotHumanTurn,

    #[error("it is not the computer's turn")]
    NotAiTurn,

    #[error("a capture selection is still pending")]
    CaptureSelectionPending,

    #[error("no capture is pending")]
    NoCapturePending,

    #[error("the game is over")]
    GameOver,
}

impl MoveError {
    pub(crate) fn invalid(cell: Cell, reason: InvalidReason) -> Self {
        MoveError::InvalidTarget { cell, reason }
    }

    /// The offending cell, for errors tied to one.
    #[must_use]
    pub fn cell(&self) -> Option<Cell> {
        match self {
            MoveError::InvalidTarget { cell, .. } => Some(*cell),
            _ => None,
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pieces per player must be between 3 and 12, got {0}")]
    PiecesPerPlayer(u8),

    #[error("flying threshold {threshold} exceeds pieces per player {pieces}")]
    FlyingThreshold { threshold: u8, pieces: u8 },

    #[error("losing count {losing} must be below the flying threshold {threshold}")]
    LosingCount { losing: u8, threshold: u8 },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("binary snapshot: {0}")]
    Binary(#[from] bincode::Error),

    #[error("json snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot does not describe a consistent game: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
