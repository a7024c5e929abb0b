//! Referee bindings for Python.
//!
//! Every method returns a JSON string so results can be passed straight
//! back to the model as a function response.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyValueError};
use pyo3::prelude::*;
use serde::Serialize;

use crate::core::{GameError, RefereeConfig};
use crate::game::Referee;
use crate::tools::{declarations, dispatch, ToolCall, ToolResponse};

create_exception!(
    rps_referee,
    GameOverError,
    PyException,
    "Raised when a round is played after the game has ended."
);

fn to_json<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyValueError::new_err(e.to_string()))
}

fn game_error(err: GameError) -> PyErr {
    match err {
        GameError::GameOver { .. } => GameOverError::new_err(err.to_string()),
        GameError::UnknownSession(_) => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for Referee.
#[pyclass(name = "Referee")]
pub struct PyReferee {
    inner: Referee,
}

#[pymethods]
impl PyReferee {
    /// Create a referee.
    ///
    /// # Arguments
    /// - seed: RNG seed for the bot; omitted means a fresh random seed
    /// - max_rounds: rounds before the game ends regardless of score
    /// - wins_to_clinch: round wins that end the game early
    /// - bot_bomb_chance: probability the bot plays its bomb while available
    #[new]
    #[pyo3(signature = (seed = None, max_rounds = 3, wins_to_clinch = 2, bot_bomb_chance = 0.15))]
    fn new(
        seed: Option<u64>,
        max_rounds: u8,
        wins_to_clinch: u8,
        bot_bomb_chance: f64,
    ) -> PyResult<Self> {
        let mut config = RefereeConfig::default()
            .with_max_rounds(max_rounds)
            .with_wins_to_clinch(wins_to_clinch)
            .with_bot_bomb_chance(bot_bomb_chance);
        config.seed = seed;
        let inner = Referee::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Validate a move without playing it.
    fn validate_move(&self, raw: &str) -> PyResult<String> {
        to_json(&self.inner.validate_move_for_user(raw))
    }

    /// Play a round. Raises GameOverError once the game has ended.
    fn play_round(&mut self, user_move: &str) -> PyResult<String> {
        let round = self.inner.play_round(user_move).map_err(game_error)?;
        to_json(&round)
    }

    fn get_game_state(&self) -> PyResult<String> {
        to_json(&self.inner.get_state())
    }

    fn reset_game(&mut self) -> PyResult<String> {
        to_json(&self.inner.reset_game())
    }

    /// Execute a model tool call and return the response envelope.
    ///
    /// Game-over and malformed calls are reported inside the envelope
    /// rather than raised.
    #[pyo3(signature = (name, arguments_json = None))]
    fn call_tool(&mut self, name: &str, arguments_json: Option<&str>) -> PyResult<String> {
        let arguments = match arguments_json {
            Some(raw) => serde_json::from_str(raw).map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => serde_json::Value::Null,
        };
        let call = ToolCall::new(name, arguments);
        to_json(&ToolResponse::from_result(dispatch(&mut self.inner, &call)))
    }

    /// Function declarations to register with the model.
    #[staticmethod]
    fn tool_declarations() -> PyResult<String> {
        to_json(&declarations())
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.inner.state().is_over()
    }

    #[getter]
    fn round_number(&self) -> u8 {
        self.inner.state().round_number()
    }

    fn __repr__(&self) -> String {
        let state = self.inner.get_state();
        format!(
            "Referee(round={}, score={}-{}, game_over={})",
            state.round_number, state.user_score, state.bot_score, state.game_over
        )
    }
}
