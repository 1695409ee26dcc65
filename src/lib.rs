//! # rust-mill
//!
//! Rules engine and computer opponent for a nine-men's-morris style mill game
//! played by one human against a heuristic AI.
//!
//! ## Design Principles
//!
//! 1. **Board Is the Truth**: Piece positions live only in the board. Counts,
//!    phases and threats are derived from it on demand.
//!
//! 2. **One Scanning Rule**: Movement, threat and mill detection all walk the
//!    board through `board::scan`, parameterized by depth.
//!
//! 3. **Explicit Turn States**: Who may act is a `TurnState`, never a flag.
//!    Rejected input returns a `MoveError` and changes nothing.
//!
//! ## Architecture
//!
//! - **Deterministic**: Every random choice draws from the state's seeded
//!   `GameRng`, so a seed plus the human's inputs replays a game exactly.
//!
//! - **Persistent Data Structures**: Mill sets and ply history use `im-rs`,
//!   making state clones O(1).
//!
//! ## Modules
//!
//! - `core`: Players, cells, configuration, RNG, plies, state, errors
//! - `board`: Grid storage, directional scanning, ring geometry
//! - `rules`: Phases, move generation, mills, the `RulesEngine` trait
//! - `capture`: Immediate and player-selected capture resolution
//! - `ai`: Move policies for the computer player
//! - `events`: Notifications for renderers and status lines
//! - `turn`: The turn controller and snapshots

pub mod ai;
pub mod board;
pub mod capture;
pub mod core;
pub mod events;
pub mod rules;
pub mod turn;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, CellState, ConfigError, Direction, GameConfig, GameRng, GameRngState, GameState,
    InvalidReason, MoveError, Player, PlayerMap, PlayerState, Ply, PlyRecord, SnapshotError,
};

pub use crate::board::{Board, BoardSnapshot, NodeId, Ring, ScanDepth};

pub use crate::rules::{
    ActiveMillSet, GameResult, LossReason, Mill, MillRules, MillTracker, Phase, RulesEngine,
};

pub use crate::capture::{
    CaptureReport, CaptureResolution, CaptureStatus, ImmediateCapture, SelectedCapture,
};

pub use crate::ai::{HeuristicPolicy, MovePolicy, RandomPolicy};

pub use crate::events::{EventLog, EventSink, GameEvent, NullSink};

pub use crate::turn::{GameSnapshot, TurnController, TurnState};
