//! # rps-referee
//!
//! Rules engine and game-state machine for Rock-Paper-Scissors-Plus: a
//! best-of-3 match between a human and a randomized bot, where each side
//! may play an unbeatable "bomb" once per game.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: validation, resolution and winner determination are
//!    side-effect-free functions. The bot's randomness is injected.
//!
//! 2. **Owned State**: no globals. A caller owns a `Referee` (one game) or
//!    a `SessionRegistry` (one game per session).
//!
//! 3. **Structured Results**: every operation returns a serializable
//!    record. Invalid input is a result, not an error; only playing past
//!    the end of a game fails.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, sides, RNG, configuration, errors
//! - `rules`: Pure rule functions
//! - `game`: The `Referee` state machine and its records
//! - `session`: Session-keyed registry of independent games
//! - `tools`: Tool declarations and dispatch for tool-calling models
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod game;
pub mod session;
pub mod tools;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameError, GameRng, Move, Outcome, RandomSource, RefereeConfig, ScriptedRandom,
    SessionId, Side, SideMap, Winner,
};

pub use crate::rules::{
    determine_game_winner, resolve_round, select_bot_move, validate_move, InvalidMove,
    ValidationResult,
};

pub use crate::game::{GameSnapshot, GameState, Referee, RoundRecord, RoundResult};

pub use crate::session::{SessionRegistry, SharedReferee};

pub use crate::tools::{
    declarations, dispatch, dispatch_in_session, ToolCall, ToolDeclaration, ToolError, ToolName,
    ToolResponse,
};
