//! Immediate capture for the computer player.
//!
//! Each queued capture removes a uniformly random opponent piece from the
//! board, drawn from the state's RNG. No input, no waiting.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{GameState, Player};
use crate::rules::RulesEngine;

use super::{CaptureReport, CaptureResolution};

/// Resolves captures on the spot with random victims.
///
/// ## Behavior
///
/// - `queue()`: Adds to the pending count
/// - `process()`: Removes one random opponent piece per pending capture,
///   returns `Complete`
/// - A capture with no opponent piece on the board is dropped
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImmediateCapture {
    capturer: Option<Player>,
    pending: u8,
}

impl ImmediateCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CaptureResolution for ImmediateCapture {
    fn queue(&mut self, capturer: Player, count: u8) {
        if count > 0 {
            self.capturer = Some(capturer);
            self.pending = self.pending.saturating_add(count);
        }
    }

    fn process<E: RulesEngine>(&mut self, engine: &E, state: &mut GameState) -> CaptureReport {
        let mut removed = SmallVec::new();
        let Some(capturer) = self.capturer else {
            self.pending = 0;
            return CaptureReport::complete(removed);
        };

        while self.pending > 0 {
            self.pending -= 1;
            let victim = state.rng.choose_iter(state.board.pieces(capturer.opponent()));
            match victim {
                Some(cell) => {
                    engine.remove_piece(state, capturer, cell);
                    removed.push(cell);
                }
                None => debug!(%capturer, "no opponent piece on the board to capture"),
            }
        }
        self.capturer = None;
        CaptureReport::complete(removed)
    }

    fn pending(&self) -> u8 {
        self.pending
    }

    fn clear(&mut self) {
        self.capturer = None;
        self.pending = 0;
    }
}
