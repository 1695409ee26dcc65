//! Turn sequencing.
//!
//! `TurnController` is the only component that calls into every other one.
//! It owns the `GameState`, accepts the human's three kinds of input, runs the
//! computer's plies and reports every observable change to an `EventSink`.
//!
//! ## States
//!
//! ```text
//! AwaitingHumanAction ──select origin──▶ HumanMoveInFlight
//!        │                                     │
//!        └──────── place / move ◀──────────────┘
//!                      │
//!          mill? ──yes──▶ AwaitingCaptureSelection ──all chosen──┐
//!                      │no                                       │
//!                      ▼                                         │
//!               AiDeliberating ◀─────────────────────────────────┘
//!                      │ run_ai_turn (captures resolve immediately)
//!                      ▼
//!               AwaitingHumanAction
//! ```
//!
//! Any state moves to `GameOver` as soon as a loss condition holds.

mod controller;
mod snapshot;

pub use controller::TurnController;
pub use snapshot::GameSnapshot;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Player};
use crate::rules::GameResult;

/// Where the controller is in the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for a placement or an origin selection.
    AwaitingHumanAction,

    /// An origin is selected; waiting for its destination.
    HumanMoveInFlight { origin: Cell },

    /// The human owes `remaining` capture selections.
    AwaitingCaptureSelection { player: Player, remaining: u8 },

    /// The computer moves next.
    AiDeliberating,

    GameOver(GameResult),
}

impl TurnState {
    /// Whether the human may place or move now.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        matches!(self, TurnState::AwaitingHumanAction | TurnState::HumanMoveInFlight { .. })
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnState::GameOver(_))
    }

    /// The result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            TurnState::GameOver(result) => Some(*result),
            _ => None,
        }
    }
}
