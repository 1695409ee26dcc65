//! Game snapshots.
//!
//! A `GameSnapshot` is everything needed to resume a game exactly: occupancy,
//! counters, active mills, history, the RNG position and the turn state. It
//! round-trips through bincode for compact storage and through JSON for
//! inspection.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{
    Cell, GameConfig, GameRng, GameRngState, GameState, Player, PlayerMap, PlayerState, PlyRecord,
    SnapshotError, BOARD_SIZE,
};
use crate::rules::{Mill, MillTracker};

use super::TurnState;

/// Serializable copy of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub players: PlayerMap<PlayerState>,
    pub mills: MillTracker,
    pub history: Vector<PlyRecord>,
    pub rng: GameRngState,
    pub turn: TurnState,
}

impl GameSnapshot {
    /// Capture a state and the turn it is in.
    #[must_use]
    pub fn capture(state: &GameState, turn: TurnState) -> Self {
        Self {
            board: state.board.clone(),
            players: state.players.clone(),
            mills: state.mills.clone(),
            history: state.history.clone(),
            rng: state.rng.state(),
            turn,
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the snapshot could have come from a game played under `config`.
    ///
    /// Decoding only guarantees well-formed data; this rejects snapshots
    /// whose blocked pattern, counters or mills contradict the board.
    pub fn validate(&self, config: &GameConfig) -> Result<(), SnapshotError> {
        let fresh = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = Cell::new(row, col);
                if self.board.get(cell).is_blocked() != fresh.get(cell).is_blocked() {
                    return Err(inconsistent(format!(
                        "cell {cell} does not match the board pattern"
                    )));
                }
            }
        }

        for (player, counters) in self.players.iter() {
            if counters.placed > config.pieces_per_player {
                return Err(inconsistent(format!(
                    "{player} placed {} of {} pieces",
                    counters.placed, config.pieces_per_player
                )));
            }
            let on_board = self.board.count(player);
            if on_board > counters.placed {
                return Err(inconsistent(format!(
                    "{player} has {on_board} pieces on the board but placed {}",
                    counters.placed
                )));
            }
            for mill in self.mills.get(player).iter() {
                if !self.is_well_formed(mill) {
                    return Err(inconsistent(format!(
                        "{player} mill {mill} is not three distinct points"
                    )));
                }
                if !mill.is_intact(&self.board, player) {
                    return Err(inconsistent(format!("{player} mill {mill} is not on the board")));
                }
            }
        }

        match self.turn {
            TurnState::AwaitingCaptureSelection { player, remaining }
                if player != config.human || remaining == 0 =>
            {
                Err(inconsistent(format!(
                    "capture selection of {remaining} for {player} cannot be pending"
                )))
            }
            TurnState::HumanMoveInFlight { origin }
                if !self.board.try_get(origin).is_some_and(|s| s.is_owned_by(config.human)) =>
            {
                Err(inconsistent(format!(
                    "selected origin {origin} is not a {} piece",
                    config.human
                )))
            }
            _ => Ok(()),
        }
    }

    /// Sorted, distinct, playable cells, as `Mill::new` builds them.
    fn is_well_formed(&self, mill: &Mill) -> bool {
        let [a, b, c] = *mill.cells();
        a < b && b < c && mill.cells().iter().all(|&cell| self.board.is_playable(cell))
    }

    /// Rebuild the live state. Call `validate` first.
    #[must_use]
    pub fn into_state(self) -> (GameState, TurnState) {
        let state = GameState {
            board: self.board,
            players: self.players,
            mills: self.mills,
            history: self.history,
            rng: GameRng::from_state(&self.rng),
        };
        (state, self.turn)
    }

    /// Score per player.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        PlayerMap::new(|player: Player| self.players[player].score)
    }
}

fn inconsistent(message: String) -> SnapshotError {
    SnapshotError::Inconsistent(message)
}
