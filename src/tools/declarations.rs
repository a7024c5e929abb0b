//! Tool names and the function declarations advertised to the model.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;

use super::dispatch::ToolError;

/// The operations the conversational layer may call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    ValidateMove,
    PlayRound,
    GetGameState,
    ResetGame,
}

impl ToolName {
    pub const ALL: [ToolName; 4] = [
        ToolName::ValidateMove,
        ToolName::PlayRound,
        ToolName::GetGameState,
        ToolName::ResetGame,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ToolName::ValidateMove => "validate_move",
            ToolName::PlayRound => "play_round",
            ToolName::GetGameState => "get_game_state",
            ToolName::ResetGame => "reset_game",
        }
    }

    #[must_use]
    pub fn declaration(self) -> ToolDeclaration {
        let (description, parameters) = match self {
            ToolName::ValidateMove => (
                "Validates a user's move input and checks if it's legal in the current game state",
                json!({
                    "type": "object",
                    "properties": {
                        "move": {
                            "type": "string",
                            "description": "The move string provided by the user (rock, paper, scissors, or bomb)"
                        }
                    },
                    "required": ["move"]
                }),
            ),
            ToolName::PlayRound => (
                "Executes a complete round: validates user move, generates bot move, determines winner, \
                 and updates game state. Use this after user provides their move.",
                json!({
                    "type": "object",
                    "properties": {
                        "user_move": {
                            "type": "string",
                            "description": "The user's move for this round"
                        }
                    },
                    "required": ["user_move"]
                }),
            ),
            ToolName::GetGameState => (
                "Retrieves the current game state including scores, round number, and bomb usage",
                json!({ "type": "object", "properties": {} }),
            ),
            ToolName::ResetGame => (
                "Resets the game to initial state for a new game",
                json!({ "type": "object", "properties": {} }),
            ),
        };

        ToolDeclaration {
            name: self.as_str().to_string(),
            description: description.to_string(),
            parameters,
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

/// A function declaration in the JSON-schema shape tool-calling models expect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Declarations for every tool, in a stable order.
#[must_use]
pub fn declarations() -> Vec<ToolDeclaration> {
    ToolName::ALL.into_iter().map(ToolName::declaration).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
            assert_eq!(
                serde_json::to_value(tool).unwrap(),
                Value::String(tool.as_str().to_string())
            );
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            "launch_missiles".parse::<ToolName>(),
            Err(ToolError::UnknownTool(name)) if name == "launch_missiles"
        ));
    }

    #[test]
    fn test_declarations_cover_every_tool() {
        let decls = declarations();
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["validate_move", "play_round", "get_game_state", "reset_game"]
        );
        for decl in &decls {
            assert_eq!(decl.parameters["type"], "object");
            assert!(!decl.description.is_empty());
        }
    }

    #[test]
    fn test_required_arguments() {
        let validate = ToolName::ValidateMove.declaration();
        assert_eq!(validate.parameters["required"], json!(["move"]));

        let play = ToolName::PlayRound.declaration();
        assert_eq!(play.parameters["required"], json!(["user_move"]));

        let state = ToolName::GetGameState.declaration();
        assert!(state.parameters.get("required").is_none());
    }
}
