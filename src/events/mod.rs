//! Outbound notifications for rendering and message collaborators.
//!
//! The controller emits a `GameEvent` for every observable change. Each event
//! carries the data a renderer needs and has a `Display` text suitable for a
//! status line.

use serde::{Deserialize, Serialize};

use crate::board::BoardSnapshot;
use crate::core::{Cell, InvalidReason, Player, Ply};
use crate::rules::{GameResult, Mill, Phase};

/// Something observable happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Occupancy changed. Sent after every board mutation.
    BoardChanged(BoardSnapshot),

    /// A ply was applied.
    PlyApplied { player: Player, ply: Ply },

    /// Scores after a scoring event or restart.
    ScoreChanged { white: u32, black: u32 },

    /// A new mill scored a point.
    MillFormed { player: Player, mill: Mill },

    /// A captured piece left the board.
    PieceRemoved { by: Player, cell: Cell },

    /// A player's phase changed.
    PhaseChanged { player: Player, phase: Phase },

    /// A player must choose opponent pieces to remove.
    CaptureRequested { player: Player, remaining: u8 },

    /// An input was rejected; tied to the offending cell.
    InvalidTarget { cell: Cell, reason: InvalidReason },

    /// The computer is about to move.
    AiThinking,

    /// The computer had nothing to play and passed.
    AiForfeited { player: Player },

    GameOver(GameResult),
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::BoardChanged(snapshot) => write!(
                f,
                "Board: {} white, {} black",
                snapshot.white.len(),
                snapshot.black.len()
            ),
            GameEvent::PlyApplied { player, ply } => write!(f, "{player}: {ply}"),
            GameEvent::ScoreChanged { white, black } => write!(f, "White {white} - Black {black}"),
            GameEvent::MillFormed { player, mill } => write!(f, "{player} formed a mill {mill}"),
            GameEvent::PieceRemoved { by, cell } => write!(f, "{by} removed the piece at {cell}"),
            GameEvent::PhaseChanged { player, phase } => {
                write!(f, "{player} enters phase {}: {phase}", phase.number())
            }
            GameEvent::CaptureRequested { player, remaining } => {
                let noun = if *remaining == 1 { "piece" } else { "pieces" };
                write!(f, "Mill! {player} removes {remaining} {} {noun}", player.opponent().name())
            }
            GameEvent::InvalidTarget { cell, reason } => write!(f, "Cannot use {cell}: {reason}"),
            GameEvent::AiThinking => write!(f, "Computer is thinking..."),
            GameEvent::AiForfeited { player } => {
                write!(f, "{player} has nothing to play and passes")
            }
            GameEvent::GameOver(result) => write!(f, "Game over. {result}"),
        }
    }
}

/// Receiver for game events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Buffers events until the driver drains them.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events emitted since the last drain, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every buffered event.
    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
