//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::board::{connections, node_id, Board, NodeId};
use crate::core::{Cell, GameConfig, Player, Ply};

pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

pub(crate) fn parse_player(name: &str) -> PyResult<Player> {
    match name.to_ascii_lowercase().as_str() {
        "white" => Ok(Player::White),
        "black" => Ok(Player::Black),
        other => Err(value_error(format!("unknown player '{other}', expected 'white' or 'black'"))),
    }
}

pub(crate) fn cell_tuple(cell: Cell) -> (u8, u8) {
    (cell.row, cell.col)
}

pub(crate) fn ply_tuple(ply: Ply) -> (Option<(u8, u8)>, (u8, u8)) {
    (ply.origin().map(cell_tuple), cell_tuple(ply.destination()))
}

/// Python wrapper for GameConfig.
#[pyclass(name = "GameConfig")]
#[derive(Clone, Debug)]
pub struct PyGameConfig(pub GameConfig);

#[pymethods]
impl PyGameConfig {
    /// Create a new game configuration.
    ///
    /// # Arguments
    /// - seed: RNG seed for the computer's random choices (default: 42)
    /// - ai_delay_ms: Pause before each computer ply (default: 1000)
    /// - human: "white" or "black" (default: "white")
    /// - pieces_per_player: Reserve size (default: 9)
    /// - flying_threshold: Flying starts below this many pieces (default: 4)
    #[new]
    #[pyo3(signature = (
        seed = 42,
        ai_delay_ms = 1000,
        human = "white",
        pieces_per_player = 9,
        flying_threshold = 4
    ))]
    fn new(
        seed: u64,
        ai_delay_ms: u64,
        human: &str,
        pieces_per_player: u8,
        flying_threshold: u8,
    ) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_seed(seed)
            .with_ai_delay_ms(ai_delay_ms)
            .with_human(parse_player(human)?)
            .with_pieces_per_player(pieces_per_player)
            .with_flying_threshold(flying_threshold);
        config.validate().map_err(value_error)?;
        Ok(Self(config))
    }

    /// Parse a configuration from JSON; missing fields take defaults.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        GameConfig::from_json(json).map(Self).map_err(value_error)
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    #[getter]
    fn ai_delay_ms(&self) -> u64 {
        self.0.ai_delay_ms
    }

    #[getter]
    fn human(&self) -> &'static str {
        self.0.human.name()
    }

    #[getter]
    fn pieces_per_player(&self) -> u8 {
        self.0.pieces_per_player
    }

    #[getter]
    fn flying_threshold(&self) -> u8 {
        self.0.flying_threshold
    }

    fn __repr__(&self) -> String {
        format!(
            "GameConfig(seed={}, ai_delay_ms={}, human={}, pieces={})",
            self.0.seed,
            self.0.ai_delay_ms,
            self.0.human.name(),
            self.0.pieces_per_player
        )
    }
}

/// Map a logical coordinate to its point id (0..24), None if not a point.
#[pyfunction]
#[pyo3(name = "node_id")]
pub fn py_node_id(row: i32, col: i32) -> Option<u8> {
    node_id(row, col).map(NodeId::index)
}

/// Every drawn line segment between neighbouring points.
#[pyfunction]
#[pyo3(name = "connections")]
pub fn py_connections() -> Vec<((u8, u8), (u8, u8))> {
    connections(&Board::new())
        .into_iter()
        .map(|(a, b)| (cell_tuple(a), cell_tuple(b)))
        .collect()
}
