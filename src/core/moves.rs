//! Move vocabulary and round outcomes.
//!
//! ## Move
//!
//! Closed set of tokens a party can submit: the three basic moves, the
//! one-shot `Bomb`, and `Invalid` for user input that failed validation.
//! Raw text is normalized exactly once, in [`Move::parse`].
//!
//! ## Outcome / Winner
//!
//! `Outcome` is the result of a single round; `Winner` is the result of a
//! whole game.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A move played in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Beats every non-bomb move. Usable once per party per game.
    Bomb,
    /// Placeholder recorded when the user's input did not validate.
    Invalid,
}

impl Move {
    /// Moves the bot draws from uniformly.
    pub const BASIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Every token a party may legally submit.
    pub const PLAYABLE: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// Parse raw text into a playable move.
    ///
    /// Surrounding whitespace is trimmed and case is ignored. Returns `None`
    /// for anything outside the vocabulary, including the literal `"invalid"`.
    ///
    /// ```
    /// use rps_referee::core::Move;
    ///
    /// assert_eq!(Move::parse("  ROCK "), Some(Move::Rock));
    /// assert_eq!(Move::parse("lizard"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim().to_ascii_lowercase();
        Self::PLAYABLE.into_iter().find(|m| m.as_str() == token)
    }

    /// Canonical lowercase token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
            Move::Invalid => "invalid",
        }
    }

    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Move::Invalid)
    }

    /// The basic move this one defeats in the rock/paper/scissors cycle.
    ///
    /// `None` for `Bomb` and `Invalid`, which sit outside the cycle.
    #[must_use]
    pub const fn beats(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Scissors => Some(Move::Paper),
            Move::Paper => Some(Move::Rock),
            Move::Bomb | Move::Invalid => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`Move::from_str`] for text outside the vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized move token '{0}'")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s).ok_or_else(|| ParseMoveError(s.to_string()))
    }
}

/// Result of a single round, from the user's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    UserWins,
    BotWins,
    Draw,
}

impl Outcome {
    /// The outcome with the roles of user and bot swapped.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Outcome::UserWins => Outcome::BotWins,
            Outcome::BotWins => Outcome::UserWins,
            Outcome::Draw => Outcome::Draw,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::UserWins => "user_wins",
            Outcome::BotWins => "bot_wins",
            Outcome::Draw => "draw",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Winner::User => "user",
            Winner::Bot => "bot",
            Winner::Draw => "draw",
        })
    }
}
