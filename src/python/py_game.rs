//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{Cell, CellState, MoveError, Player, BOARD_SIZE};
use crate::events::EventLog;
use crate::turn::{GameSnapshot, TurnController, TurnState};

use super::py_core::{cell_tuple, parse_player, ply_tuple, value_error, PyGameConfig};

fn move_error(err: MoveError) -> PyErr {
    value_error(err)
}

fn turn_name(turn: TurnState) -> &'static str {
    match turn {
        TurnState::AwaitingHumanAction => "awaiting_human_action",
        TurnState::HumanMoveInFlight { .. } => "human_move_in_flight",
        TurnState::AwaitingCaptureSelection { .. } => "awaiting_capture_selection",
        TurnState::AiDeliberating => "ai_deliberating",
        TurnState::GameOver(_) => "game_over",
    }
}

/// Python wrapper for TurnController.
///
/// A front end drives the game through three input methods and reads the
/// board back as a 7x7 numpy array after each call.
#[pyclass(name = "MillGame")]
pub struct PyMillGame {
    controller: TurnController,
}

#[pymethods]
impl PyMillGame {
    /// Create a new game.
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PyGameConfig>) -> PyResult<Self> {
        let config = config.map(|c| c.0).unwrap_or_default();
        let controller = TurnController::new(config).map_err(value_error)?;
        Ok(Self { controller })
    }

    /// Resume a game from a JSON snapshot.
    #[staticmethod]
    #[pyo3(signature = (json, config = None))]
    fn from_snapshot_json(json: &str, config: Option<PyGameConfig>) -> PyResult<Self> {
        let config = config.map(|c| c.0).unwrap_or_default();
        let snapshot = GameSnapshot::from_json(json).map_err(value_error)?;
        let controller = TurnController::restore(config, snapshot).map_err(value_error)?;
        Ok(Self { controller })
    }

    // === Input ===

    /// Select the piece to move. Returns the new turn state name.
    fn try_select_origin(&mut self, row: u8, col: u8) -> PyResult<&'static str> {
        self.controller
            .try_select_origin(Cell::new(row, col))
            .map(turn_name)
            .map_err(move_error)
    }

    /// Place a piece, or move the selected piece.
    fn try_move_to(&mut self, row: u8, col: u8) -> PyResult<&'static str> {
        self.controller.try_move_to(Cell::new(row, col)).map(turn_name).map_err(move_error)
    }

    /// Remove an opponent piece after forming a mill.
    fn confirm_capture_selection(&mut self, row: u8, col: u8) -> PyResult<&'static str> {
        self.controller
            .confirm_capture_selection(Cell::new(row, col))
            .map(turn_name)
            .map_err(move_error)
    }

    /// Play the computer's ply. Call after waiting `ai_delay_ms`.
    fn run_ai_turn(&mut self) -> PyResult<&'static str> {
        self.controller.run_ai_turn().map(turn_name).map_err(move_error)
    }

    fn restart(&mut self) {
        self.controller.restart();
    }

    // === Observation ===

    /// Board as int8: -1 not a point, 0 empty, 1 white, 2 black.
    fn board_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let board = self.controller.board();
        let side = usize::from(BOARD_SIZE);
        let mut flat: Vec<i8> = Vec::with_capacity(side * side);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = Cell::new(row, col);
                let value = match board.get(cell) {
                    _ if !board.is_playable(cell) => -1,
                    CellState::Occupied(Player::White) => 1,
                    CellState::Occupied(Player::Black) => 2,
                    _ => 0,
                };
                flat.push(value);
            }
        }
        let size = usize::from(BOARD_SIZE);
        PyArray1::from_vec_bound(py, flat)
            .reshape([size, size])
            .map_err(value_error)
    }

    /// Text rendering of the board.
    fn board_text(&self) -> String {
        self.controller.board().to_string()
    }

    #[getter]
    fn turn(&self) -> &'static str {
        turn_name(self.controller.turn())
    }

    /// The origin selected for the move in flight, if any.
    #[getter]
    fn selected_origin(&self) -> Option<(u8, u8)> {
        match self.controller.turn() {
            TurnState::HumanMoveInFlight { origin } => Some(cell_tuple(origin)),
            _ => None,
        }
    }

    /// Captures the human still has to choose.
    #[getter]
    fn pending_captures(&self) -> u8 {
        match self.controller.turn() {
            TurnState::AwaitingCaptureSelection { remaining, .. } => remaining,
            _ => 0,
        }
    }

    /// (white, black) scores.
    #[getter]
    fn scores(&self) -> (u32, u32) {
        (self.controller.score(Player::White), self.controller.score(Player::Black))
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.controller.is_game_over()
    }

    /// Winning side's name once the game is over.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.controller.result().map(|result| result.winner.name())
    }

    #[getter]
    fn ai_delay_ms(&self) -> u64 {
        self.controller.config().ai_delay_ms
    }

    /// Phase number (1-3) for "white" or "black".
    fn phase(&self, player: &str) -> PyResult<u8> {
        Ok(self.controller.phase(parse_player(player)?).number())
    }

    /// Legal plies as (origin or None, destination) pairs.
    fn legal_moves(&self, player: &str) -> PyResult<Vec<(Option<(u8, u8)>, (u8, u8))>> {
        let player = parse_player(player)?;
        Ok(self.controller.legal_plies(player).into_iter().map(ply_tuple).collect())
    }

    /// Empty points where `attacker` is one piece from a mill.
    fn threats(&self, attacker: &str) -> PyResult<Vec<(u8, u8)>> {
        let attacker = parse_player(attacker)?;
        Ok(self.controller.threats(attacker).into_iter().map(cell_tuple).collect())
    }

    /// Message texts for every event since the last call.
    fn drain_events(&mut self) -> Vec<String> {
        let log: &mut EventLog = self.controller.sink_mut();
        log.drain().map(|event| event.to_string()).collect()
    }

    fn snapshot_json(&self) -> PyResult<String> {
        self.controller.snapshot().to_json().map_err(value_error)
    }

    fn snapshot_bytes(&self) -> PyResult<Vec<u8>> {
        self.controller.snapshot().to_bytes().map_err(value_error)
    }

    fn __repr__(&self) -> String {
        let (white, black) = self.scores();
        format!("MillGame(turn={}, white={white}, black={black})", self.turn())
    }
}
