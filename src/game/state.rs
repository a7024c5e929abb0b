//! Game state and the records handed back to callers.
//!
//! ## GameState
//!
//! The live, mutable state of one game. Only [`crate::game::Referee`]
//! mutates it, through `commit_round`, so the invariants below hold at
//! every observable point:
//!
//! - `round_number <= max_rounds`
//! - `user_score + bot_score <= round_number`
//! - `history.len() == round_number`
//! - bomb flags only ever go false -> true
//! - `game_over` never reverts
//!
//! ## GameSnapshot / RoundRecord / RoundResult
//!
//! Plain serializable copies for the outer layer; flat field names match
//! what the conversational layer phrases its replies from.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Outcome, RefereeConfig, Side, SideMap, Winner};
use crate::rules::{determine_game_winner, InvalidMove};

/// One completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u8,
    /// The user's move, or `invalid`.
    pub user_move: Move,
    pub bot_move: Move,
    pub outcome: Outcome,
    /// Scores after this round.
    pub user_score: u8,
    pub bot_score: u8,
}

/// Live state of a single game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    round_number: u8,
    scores: SideMap<u8>,
    bombs_used: SideMap<bool>,
    game_over: bool,
    history: Vec<RoundRecord>,
}

impl GameState {
    /// Zero state: no rounds played, nothing spent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds completed so far.
    #[must_use]
    pub fn round_number(&self) -> u8 {
        self.round_number
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u8 {
        self.scores[side]
    }

    #[must_use]
    pub fn bomb_used(&self, side: Side) -> bool {
        self.bombs_used[side]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Rounds in chronological order.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Overall winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.game_over
            .then(|| determine_game_winner(self.scores.user, self.scores.bot))
    }

    /// Read-only copy for callers.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round_number: self.round_number,
            user_score: self.scores.user,
            bot_score: self.scores.bot,
            user_bomb_used: self.bombs_used.user,
            bot_bomb_used: self.bombs_used.bot,
            game_over: self.game_over,
            rounds_history: self.history.clone(),
        }
    }

    /// Apply a resolved round.
    ///
    /// The caller has already checked the game is still in progress.
    pub(crate) fn commit_round(
        &mut self,
        user_move: Move,
        bot_move: Move,
        outcome: Outcome,
        config: &RefereeConfig,
    ) -> &RoundRecord {
        debug_assert!(!self.game_over, "round committed after game over");

        for (side, mv) in [(Side::User, user_move), (Side::Bot, bot_move)] {
            if mv.is_bomb() {
                self.bombs_used[side] = true;
            }
        }

        if let Some(side) = Side::scoring(outcome) {
            self.scores[side] += 1;
        }

        self.round_number += 1;
        self.history.push(RoundRecord {
            round: self.round_number,
            user_move,
            bot_move,
            outcome,
            user_score: self.scores.user,
            bot_score: self.scores.bot,
        });

        let clinched = self
            .scores
            .iter()
            .any(|(_, &score)| score >= config.wins_to_clinch);
        self.game_over = self.round_number >= config.max_rounds || clinched;

        &self.history[self.history.len() - 1]
    }
}

/// Serializable copy of a [`GameState`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round_number: u8,
    pub user_score: u8,
    pub bot_score: u8,
    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,
    pub game_over: bool,
    pub rounds_history: Vec<RoundRecord>,
}

impl GameSnapshot {
    /// Overall winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.game_over
            .then(|| determine_game_winner(self.user_score, self.bot_score))
    }
}

/// Everything the outer layer needs to announce a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_number: u8,
    /// The user's move, or `invalid` if the input was rejected.
    pub user_move: Move,
    pub bot_move: Move,
    pub outcome: Outcome,
    pub user_score: u8,
    pub bot_score: u8,
    pub game_over: bool,
    /// Set only when `game_over`.
    pub winner: Option<Winner>,
    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,
    /// Why the user's input wasted the round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_reason: Option<InvalidMove>,
}
