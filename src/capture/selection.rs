//! Player-selected capture for the human side.
//!
//! Queued captures wait until the player designates a victim for each one.
//! Any opponent piece on the board is eligible; pieces standing in a mill are
//! not protected.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::{debug, info};

use crate::core::{Cell, GameState, InvalidReason, MoveError, Player};
use crate::rules::RulesEngine;

use super::{CaptureReport, CaptureResolution, CaptureStatus};

/// Holds captures until the player picks their victims.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCapture {
    capturer: Option<Player>,
    pending: u8,
}

impl SelectedCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an outstanding selection, as recorded in a snapshot.
    #[must_use]
    pub fn awaiting(capturer: Player, pending: u8) -> Self {
        Self {
            capturer: (pending > 0).then_some(capturer),
            pending,
        }
    }

    /// Who is choosing, while a selection is outstanding.
    #[must_use]
    pub fn capturer(&self) -> Option<Player> {
        self.capturer.filter(|_| self.pending > 0)
    }

    #[must_use]
    pub fn status(&self) -> CaptureStatus {
        match self.capturer() {
            Some(player) => CaptureStatus::AwaitingSelection {
                player,
                remaining: self.pending,
            },
            None => CaptureStatus::Complete,
        }
    }

    /// Remove the opponent piece at `cell` for the next outstanding capture.
    ///
    /// Rejections leave the board and the queue untouched.
    pub fn select<E: RulesEngine>(
        &mut self,
        engine: &E,
        state: &mut GameState,
        cell: Cell,
    ) -> Result<CaptureReport, MoveError> {
        let capturer = self.capturer().ok_or(MoveError::NoCapturePending)?;

        match state.board.try_get(cell) {
            None => return Err(MoveError::invalid(cell, InvalidReason::OutOfBounds)),
            Some(_) if !state.board.is_playable(cell) => {
                return Err(MoveError::invalid(cell, InvalidReason::Blocked))
            }
            Some(occupant) if !occupant.is_owned_by(capturer.opponent()) => {
                return Err(MoveError::invalid(cell, InvalidReason::NotOpponentPiece))
            }
            Some(_) => {}
        }

        engine.remove_piece(state, capturer, cell);
        self.pending -= 1;

        let mut report = self.process(engine, state);
        report.removed.insert(0, cell);
        Ok(report)
    }
}

impl CaptureResolution for SelectedCapture {
    fn queue(&mut self, capturer: Player, count: u8) {
        if count > 0 {
            self.capturer = Some(capturer);
            self.pending = self.pending.saturating_add(count);
        }
    }

    fn process<E: RulesEngine>(&mut self, _engine: &E, state: &mut GameState) -> CaptureReport {
        let Some(capturer) = self.capturer() else {
            self.clear();
            return CaptureReport::complete(smallvec![]);
        };

        if state.board.pieces(capturer.opponent()).next().is_none() {
            info!(
                %capturer,
                skipped = self.pending, "no opponent piece to capture, skipping selection"
            );
            self.clear();
            return CaptureReport::complete(smallvec![]);
        }

        debug!(%capturer, remaining = self.pending, "awaiting capture selection");
        CaptureReport {
            status: self.status(),
            removed: smallvec![],
        }
    }

    fn pending(&self) -> u8 {
        self.pending
    }

    fn clear(&mut self) {
        self.capturer = None;
        self.pending = 0;
    }
}
