//! Core types: players, cells, configuration, RNG, plies, state, errors.
//!
//! Everything here is plain data. Rule logic lives in `rules`, and the turn
//! sequencing that drives it lives in `turn`.

pub mod action;
pub mod cell;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Ply, PlyRecord};
pub use cell::{Cell, CellState, Direction, BOARD_SIZE};
pub use config::GameConfig;
pub use error::{ConfigError, InvalidReason, MoveError, SnapshotError};
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PlayerState};
