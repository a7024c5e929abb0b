//! Python bindings for the rps-referee engine.
//!
//! The conversational layer drives the game through these bindings.
//!
//! # Quick Start
//!
//! ```python
//! import json
//! import rps_referee
//!
//! referee = rps_referee.Referee(seed=7)
//!
//! # Register these with the model
//! tools = json.loads(rps_referee.Referee.tool_declarations())
//!
//! # Execute whatever the model asks for
//! reply = referee.call_tool("play_round", '{"user_move": "rock"}')
//!
//! try:
//!     referee.play_round("paper")
//! except rps_referee.GameOverError:
//!     referee.reset_game()
//! ```

use pyo3::prelude::*;

mod py_referee;

pub use py_referee::*;

/// rps-referee: Rock-Paper-Scissors-Plus rules engine.
#[pymodule]
fn rps_referee(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyReferee>()?;
    m.add("GameOverError", m.py().get_type_bound::<GameOverError>())?;
    Ok(())
}
