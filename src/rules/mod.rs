//! Move-resolution rules.
//!
//! Pure functions only:
//! - Move validation against the vocabulary and bomb usage
//! - Round resolution
//! - Game winner determination
//! - Randomized bot move selection (random source injected)
//!
//! State lives in [`crate::game`]; these functions never see it.

pub mod engine;

pub use engine::{
    determine_game_winner, resolve_round, select_bot_move, validate_move, InvalidMove,
    ValidationResult,
};
