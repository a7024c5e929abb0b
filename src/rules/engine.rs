//! Pure rule functions.
//!
//! Nothing here touches game state. Given the same inputs (and the same
//! random source) every function returns the same output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Move, Outcome, RandomSource, Winner};

/// Why a user's input was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvalidMove {
    /// Text outside the move vocabulary.
    #[error("Invalid move '{input}'. Valid moves: rock, paper, scissors, bomb")]
    Unrecognized { input: String },

    /// A second bomb in the same game.
    #[error("Bomb has already been used this game")]
    BombAlreadyUsed,
}

/// Outcome of validating raw user input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid { parsed_move: Move },
    Invalid { reason: InvalidMove },
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// The move to record for the round: the canonical token, or
    /// `Move::Invalid`.
    #[must_use]
    pub fn played_move(&self) -> Move {
        match self {
            ValidationResult::Valid { parsed_move } => *parsed_move,
            ValidationResult::Invalid { .. } => Move::Invalid,
        }
    }

    #[must_use]
    pub fn invalid_reason(&self) -> Option<&InvalidMove> {
        match self {
            ValidationResult::Valid { .. } => None,
            ValidationResult::Invalid { reason } => Some(reason),
        }
    }
}

/// Validate raw user input against the move vocabulary.
///
/// Never mutates anything; committing a bomb is the caller's job once the
/// round actually resolves.
///
/// ```
/// use rps_referee::core::Move;
/// use rps_referee::rules::{validate_move, InvalidMove, ValidationResult};
///
/// assert_eq!(
///     validate_move(" Rock", false),
///     ValidationResult::Valid { parsed_move: Move::Rock },
/// );
/// assert_eq!(
///     validate_move("bomb", true),
///     ValidationResult::Invalid { reason: InvalidMove::BombAlreadyUsed },
/// );
/// ```
#[must_use]
pub fn validate_move(raw_input: &str, bomb_already_used: bool) -> ValidationResult {
    match Move::parse(raw_input) {
        None => ValidationResult::Invalid {
            reason: InvalidMove::Unrecognized {
                input: raw_input.to_string(),
            },
        },
        Some(Move::Bomb) if bomb_already_used => ValidationResult::Invalid {
            reason: InvalidMove::BombAlreadyUsed,
        },
        Some(parsed_move) => ValidationResult::Valid { parsed_move },
    }
}

/// Resolve one round.
///
/// Precedence: invalid moves lose outright, then bomb beats everything but
/// bomb, then the rock/paper/scissors cycle.
#[must_use]
pub fn resolve_round(user_move: Move, bot_move: Move) -> Outcome {
    match (user_move, bot_move) {
        (Move::Invalid, Move::Invalid) => Outcome::Draw,
        (Move::Invalid, _) => Outcome::BotWins,
        (_, Move::Invalid) => Outcome::UserWins,
        (Move::Bomb, Move::Bomb) => Outcome::Draw,
        (Move::Bomb, _) => Outcome::UserWins,
        (_, Move::Bomb) => Outcome::BotWins,
        (user, bot) if user == bot => Outcome::Draw,
        (user, bot) if user.beats() == Some(bot) => Outcome::UserWins,
        _ => Outcome::BotWins,
    }
}

/// Compare final scores.
#[must_use]
pub fn determine_game_winner(user_score: u8, bot_score: u8) -> Winner {
    match user_score.cmp(&bot_score) {
        std::cmp::Ordering::Greater => Winner::User,
        std::cmp::Ordering::Less => Winner::Bot,
        std::cmp::Ordering::Equal => Winner::Draw,
    }
}

/// Pick the bot's move.
///
/// Draws uniformly from the basic moves; while the bomb is available it is
/// substituted with probability `bomb_chance`, clamped to `[0, 1]`.
pub fn select_bot_move<R: RandomSource + ?Sized>(
    bomb_available: bool,
    bomb_chance: f64,
    rng: &mut R,
) -> Move {
    let basic = Move::BASIC[rng.pick_index(Move::BASIC.len())];
    if bomb_available && rng.chance(bomb_chance) {
        Move::Bomb
    } else {
        basic
    }
}
