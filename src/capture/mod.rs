//! Capture resolution.
//!
//! Every new mill earns its player one capture. How a capture picks its victim
//! depends on who earned it:
//! - **Immediate** (computer): a uniformly random opponent piece is removed
//!   as soon as the capture is queued
//! - **Selected** (human): resolution stops and waits for the player to
//!   designate each victim
//!
//! The turn controller owns one resolver of each kind and never lets the
//! computer move while a selection is outstanding.
//!
//! ## Example Usage
//!
//! ```
//! use rust_mill::capture::{CaptureResolution, CaptureStatus, ImmediateCapture};
//! use rust_mill::core::{Cell, CellState, GameState, Player};
//! use rust_mill::rules::MillRules;
//!
//! let rules = MillRules::default();
//! let mut state = GameState::new(42);
//! state.board.set(Cell::new(0, 0), CellState::Occupied(Player::White));
//!
//! let mut resolver = ImmediateCapture::new();
//! resolver.queue(Player::Black, 1);
//! let report = resolver.process(&rules, &mut state);
//!
//! assert_eq!(report.status, CaptureStatus::Complete);
//! assert_eq!(report.removed.as_slice(), &[Cell::new(0, 0)]);
//! ```

mod immediate;
mod selection;

pub use immediate::ImmediateCapture;
pub use selection::SelectedCapture;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, GameState, Player};
use crate::rules::RulesEngine;

/// Status returned by capture processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureStatus {
    /// Nothing left to capture.
    Complete,

    /// Waiting for `player` to choose `remaining` more victims.
    AwaitingSelection { player: Player, remaining: u8 },
}

/// Outcome of one processing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureReport {
    pub status: CaptureStatus,
    /// Cells emptied during this call, in removal order.
    pub removed: SmallVec<[Cell; 2]>,
}

impl CaptureReport {
    pub(crate) fn complete(removed: SmallVec<[Cell; 2]>) -> Self {
        Self {
            status: CaptureStatus::Complete,
            removed,
        }
    }
}

/// Trait for capture resolvers.
pub trait CaptureResolution {
    /// Queue `count` captures earned by `capturer`.
    fn queue(&mut self, capturer: Player, count: u8);

    /// Resolve queued captures until complete or waiting for input.
    fn process<E: RulesEngine>(&mut self, engine: &E, state: &mut GameState) -> CaptureReport;

    /// Captures queued but not yet resolved.
    fn pending(&self) -> u8;

    /// Check if nothing is queued.
    fn is_complete(&self) -> bool {
        self.pending() == 0
    }

    /// Drop all queued captures.
    fn clear(&mut self);
}
