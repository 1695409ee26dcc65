//! Python bindings for the rust-mill engine.
//!
//! Lets a Python front end own rendering and pointer input while the engine
//! owns the rules.
//!
//! # Quick Start
//!
//! ```python
//! import time
//! import rust_mill as mill
//!
//! game = mill.MillGame(mill.GameConfig(seed=7, ai_delay_ms=500))
//!
//! game.try_move_to(0, 0)
//! if game.turn == "ai_deliberating":
//!     time.sleep(game.ai_delay_ms / 1000)
//!     game.run_ai_turn()
//!
//! board = game.board_numpy()      # 7x7 int8
//! for line in game.drain_events():
//!     print(line)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// rust-mill: rules engine and computer opponent for the mill game.
#[pymodule]
fn rust_mill(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameConfig>()?;
    m.add_class::<PyMillGame>()?;

    // Geometry helpers for renderers
    m.add_function(wrap_pyfunction!(py_node_id, m)?)?;
    m.add_function(wrap_pyfunction!(py_connections, m)?)?;

    Ok(())
}
