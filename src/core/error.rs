//! Error types.
//!
//! Invalid user moves are not errors here: they are ordinary results
//! (see [`crate::rules::ValidationResult`]) that waste the round. Only
//! conditions the caller must act on surface as `Err`.

use thiserror::Error;

use super::session::SessionId;

/// Failures of state machine operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// `play_round` after the game ended. Reset before playing again.
    #[error("game is over after {rounds_played} round(s); reset to play again")]
    GameOver { rounds_played: u8 },

    #[error("no game for session {0}")]
    UnknownSession(SessionId),
}

/// Rejected referee configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_rounds must be at least 1")]
    NoRounds,

    #[error("wins_to_clinch must be in 1..={rounds} (got {wins})")]
    ClinchOutOfRange { wins: u8, rounds: u8 },

    #[error("bot_bomb_chance must be within [0, 1] (got {0})")]
    InvalidBombChance(f64),

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
