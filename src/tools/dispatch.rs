//! Executing tool calls against a referee.
//!
//! `dispatch` is the typed path: it returns the tool's JSON result or a
//! [`ToolError`]. `ToolResponse::from_result` folds either into the envelope
//! handed back to the model, so a game-over or a malformed call becomes
//! something the model can read and react to.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::PoisonError;
use thiserror::Error;
use tracing::debug;

use crate::core::{GameError, Move, RandomSource, SessionId};
use crate::game::{GameSnapshot, Referee, RoundResult};
use crate::session::SessionRegistry;

use super::declarations::ToolName;

/// A tool invocation as emitted by the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: ToolName,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("failed to encode tool result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ToolError {
    /// Stable machine-readable tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::UnknownTool(_) => "unknown_tool",
            ToolError::InvalidArguments { .. } => "invalid_arguments",
            ToolError::Game(GameError::GameOver { .. }) => "game_over",
            ToolError::Game(GameError::UnknownSession(_)) => "unknown_session",
            ToolError::Encode(_) => "internal",
        }
    }
}

#[derive(Deserialize)]
struct ValidateMoveArgs {
    #[serde(rename = "move")]
    raw: String,
}

#[derive(Deserialize)]
struct PlayRoundArgs {
    user_move: String,
}

#[derive(Serialize)]
struct ValidateMoveOutput {
    is_valid: bool,
    parsed_move: Option<Move>,
    error_message: Option<String>,
    current_state: GameSnapshot,
}

#[derive(Serialize)]
struct PlayRoundOutput {
    #[serde(flatten)]
    round: RoundResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

fn parse_args<T: for<'de> Deserialize<'de>>(tool: ToolName, arguments: &Value) -> Result<T, ToolError> {
    // Models sometimes omit the arguments object for argument-less calls.
    let arguments = if arguments.is_null() { json!({}) } else { arguments.clone() };
    serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments { tool, source })
}

/// Run a tool call against a referee.
pub fn dispatch<R: RandomSource>(referee: &mut Referee<R>, call: &ToolCall) -> Result<Value, ToolError> {
    let tool: ToolName = call.name.parse()?;
    debug!(%tool, arguments = %call.arguments, "tool call");

    let value = match tool {
        ToolName::ValidateMove => {
            let args: ValidateMoveArgs = parse_args(tool, &call.arguments)?;
            let validation = referee.validate_move_for_user(&args.raw);
            serde_json::to_value(ValidateMoveOutput {
                is_valid: validation.is_valid(),
                parsed_move: validation.is_valid().then(|| validation.played_move()),
                error_message: validation.invalid_reason().map(ToString::to_string),
                current_state: referee.get_state(),
            })?
        }
        ToolName::PlayRound => {
            let args: PlayRoundArgs = parse_args(tool, &call.arguments)?;
            let round = referee.play_round(&args.user_move)?;
            let error_message = round.invalid_reason.as_ref().map(ToString::to_string);
            serde_json::to_value(PlayRoundOutput {
                round,
                error_message,
            })?
        }
        ToolName::GetGameState => serde_json::to_value(referee.get_state())?,
        ToolName::ResetGame => json!({
            "message": "Game has been reset",
            "state": serde_json::to_value(referee.reset_game())?,
        }),
    };

    Ok(value)
}

/// Run a tool call against a session's game, creating the game on first use.
pub fn dispatch_in_session(
    registry: &SessionRegistry,
    id: &SessionId,
    call: &ToolCall,
) -> Result<Value, ToolError> {
    let referee = registry.get_or_create(id);
    let mut guard = referee.lock().unwrap_or_else(PoisonError::into_inner);
    dispatch(&mut *guard, call)
}

/// Failure half of a [`ToolResponse`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFailure {
    pub kind: String,
    pub message: String,
}

/// Envelope returned to the model for every call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolFailure>,
}

impl ToolResponse {
    #[must_use]
    pub fn from_result(result: Result<Value, ToolError>) -> Self {
        match result {
            Ok(value) => Self {
                ok: true,
                result: Some(value),
                error: None,
            },
            Err(err) => Self {
                ok: false,
                result: None,
                error: Some(ToolFailure {
                    kind: err.kind().to_string(),
                    message: err.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RefereeConfig, ScriptedRandom};

    fn referee(bot_moves: &[Move]) -> Referee<ScriptedRandom> {
        Referee::with_rng(
            RefereeConfig::default(),
            ScriptedRandom::from_bot_moves(bot_moves),
        )
        .unwrap()
    }

    #[test]
    fn test_validate_move_tool() {
        let mut referee = referee(&[]);
        let value = dispatch(
            &mut referee,
            &ToolCall::new("validate_move", json!({"move": " Paper "})),
        )
        .unwrap();

        assert_eq!(value["is_valid"], true);
        assert_eq!(value["parsed_move"], "paper");
        assert!(value["error_message"].is_null());
        assert_eq!(value["current_state"]["round_number"], 0);
    }

    #[test]
    fn test_validate_move_tool_invalid() {
        let mut referee = referee(&[]);
        let value = dispatch(
            &mut referee,
            &ToolCall::new("validate_move", json!({"move": "lizard"})),
        )
        .unwrap();

        assert_eq!(value["is_valid"], false);
        assert!(value["parsed_move"].is_null());
        assert_eq!(
            value["error_message"],
            "Invalid move 'lizard'. Valid moves: rock, paper, scissors, bomb"
        );
    }

    #[test]
    fn test_play_round_tool() {
        let mut referee = referee(&[Move::Rock]);
        let value = dispatch(
            &mut referee,
            &ToolCall::new("play_round", json!({"user_move": "paper"})),
        )
        .unwrap();

        assert_eq!(value["round_number"], 1);
        assert_eq!(value["user_move"], "paper");
        assert_eq!(value["bot_move"], "rock");
        assert_eq!(value["outcome"], "user_wins");
        assert_eq!(value["user_score"], 1);
        assert_eq!(value["game_over"], false);
        assert!(value["winner"].is_null());
        assert!(value.get("error_message").is_none());
    }

    #[test]
    fn test_play_round_tool_invalid_input_has_message() {
        let mut referee = referee(&[Move::Rock]);
        let value = dispatch(
            &mut referee,
            &ToolCall::new("play_round", json!({"user_move": "banana"})),
        )
        .unwrap();

        assert_eq!(value["user_move"], "invalid");
        assert_eq!(value["outcome"], "bot_wins");
        assert_eq!(value["invalid_reason"]["kind"], "unrecognized");
        assert_eq!(
            value["error_message"],
            "Invalid move 'banana'. Valid moves: rock, paper, scissors, bomb"
        );
    }

    #[test]
    fn test_state_and_reset_tools() {
        let mut referee = referee(&[Move::Paper]);
        referee.play_round("scissors").unwrap();

        let state = dispatch(&mut referee, &ToolCall::new("get_game_state", Value::Null)).unwrap();
        assert_eq!(state["round_number"], 1);
        assert_eq!(state["rounds_history"].as_array().map(Vec::len), Some(1));

        let reset = dispatch(&mut referee, &ToolCall::new("reset_game", json!({}))).unwrap();
        assert_eq!(reset["message"], "Game has been reset");
        assert_eq!(reset["state"]["round_number"], 0);
        assert_eq!(referee.get_state().round_number, 0);
    }

    #[test]
    fn test_unknown_tool() {
        let mut referee = referee(&[]);
        let err = dispatch(&mut referee, &ToolCall::new("fold", json!({}))).unwrap_err();
        assert_eq!(err.kind(), "unknown_tool");
    }

    #[test]
    fn test_missing_argument() {
        let mut referee = referee(&[]);
        let err = dispatch(&mut referee, &ToolCall::new("play_round", json!({"move": "rock"})))
            .unwrap_err();
        assert!(matches!(
            err,
            ToolError::InvalidArguments {
                tool: ToolName::PlayRound,
                ..
            }
        ));
        // nothing was played
        assert_eq!(referee.get_state().round_number, 0);
    }

    #[test]
    fn test_game_over_surfaces_as_error() {
        let mut referee = referee(&[Move::Scissors, Move::Scissors]);
        referee.play_round("rock").unwrap();
        referee.play_round("rock").unwrap();

        let err = dispatch(
            &mut referee,
            &ToolCall::new("play_round", json!({"user_move": "rock"})),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "game_over");
    }

    #[test]
    fn test_response_envelope() {
        let ok = ToolResponse::from_result(Ok(json!({"x": 1})));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"ok": true, "result": {"x": 1}})
        );

        let failed = ToolResponse::from_result(Err(GameError::GameOver { rounds_played: 3 }.into()));
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({
                "ok": false,
                "error": {
                    "kind": "game_over",
                    "message": "game is over after 3 round(s); reset to play again"
                }
            })
        );
    }

    #[test]
    fn test_dispatch_in_session() {
        let registry = SessionRegistry::new(RefereeConfig::default()).unwrap();
        let id = SessionId::new("chat-1");

        let value = dispatch_in_session(
            &registry,
            &id,
            &ToolCall::new("play_round", json!({"user_move": "rock"})),
        )
        .unwrap();
        assert_eq!(value["round_number"], 1);
        assert_eq!(registry.get_state(&id).unwrap().round_number, 1);
    }
}
