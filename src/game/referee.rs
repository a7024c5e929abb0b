//! The game state machine.
//!
//! A `Referee` owns one game: its config, its state, and the random source
//! the bot draws from. The four public operations are the whole surface
//! the conversational layer sees:
//!
//! | Operation                | Mutates | Fails                      |
//! |--------------------------|---------|----------------------------|
//! | `get_state`              | no      | never                      |
//! | `validate_move_for_user` | no      | never                      |
//! | `play_round`             | yes     | `GameOver` after the end   |
//! | `reset_game`             | yes     | never                      |
//!
//! ## Example
//!
//! ```
//! use rps_referee::core::{Move, Outcome, RefereeConfig, ScriptedRandom, Winner};
//! use rps_referee::game::Referee;
//!
//! let bot = ScriptedRandom::from_bot_moves(&[Move::Scissors, Move::Paper]);
//! let mut referee = Referee::with_rng(RefereeConfig::default(), bot).unwrap();
//!
//! assert_eq!(referee.play_round("rock").unwrap().outcome, Outcome::UserWins);
//!
//! let last = referee.play_round("bomb").unwrap();
//! assert!(last.game_over);
//! assert_eq!(last.winner, Some(Winner::User));
//! assert!(referee.play_round("paper").is_err());
//! ```

use tracing::{debug, info, warn};

use crate::core::{ConfigError, GameError, GameRng, RandomSource, RefereeConfig, Side};
use crate::rules::{resolve_round, select_bot_move, validate_move, ValidationResult};

use super::state::{GameSnapshot, GameState, RoundResult};

/// Owns and referees a single game.
#[derive(Clone, Debug)]
pub struct Referee<R = GameRng> {
    config: RefereeConfig,
    state: GameState,
    rng: R,
}

impl Referee<GameRng> {
    /// Create a referee whose bot draws from a [`GameRng`] seeded by
    /// `config.seed`, or from entropy when no seed is set.
    pub fn new(config: RefereeConfig) -> Result<Self, ConfigError> {
        let rng = config.build_rng();
        debug!(seed = rng.seed(), "bot rng seeded");
        Self::with_rng(config, rng)
    }
}

impl Default for Referee<GameRng> {
    fn default() -> Self {
        let config = RefereeConfig::default();
        let rng = config.build_rng();
        Self::from_validated(config, rng)
    }
}

impl<R: RandomSource> Referee<R> {
    /// Create a referee with an injected random source.
    pub fn with_rng(config: RefereeConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config, rng))
    }

    /// Skip validation for a config already checked by the caller.
    pub(crate) fn from_validated(config: RefereeConfig, rng: R) -> Self {
        Self {
            config,
            state: GameState::new(),
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RefereeConfig {
        &self.config
    }

    /// Borrow the live state without copying.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The bot's random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Read-only copy of the current game.
    #[must_use]
    pub fn get_state(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Check user input against the user's current bomb availability.
    #[must_use]
    pub fn validate_move_for_user(&self, raw_input: &str) -> ValidationResult {
        validate_move(raw_input, self.state.bomb_used(Side::User))
    }

    /// Play one round with the user's raw input.
    ///
    /// Invalid input still consumes the round and hands it to the bot.
    /// Fails only when the game is already over, in which case nothing
    /// changes.
    pub fn play_round(&mut self, raw_user_input: &str) -> Result<RoundResult, GameError> {
        if self.state.is_over() {
            warn!(
                rounds_played = self.state.round_number(),
                "round rejected: game is over"
            );
            return Err(GameError::GameOver {
                rounds_played: self.state.round_number(),
            });
        }

        let validation = self.validate_move_for_user(raw_user_input);
        if let Some(reason) = validation.invalid_reason() {
            warn!(
                round = self.state.round_number() + 1,
                %reason,
                "invalid input wastes the round"
            );
        }

        let user_move = validation.played_move();
        let bot_move = select_bot_move(
            !self.state.bomb_used(Side::Bot),
            self.config.bot_bomb_chance,
            &mut self.rng,
        );
        let outcome = resolve_round(user_move, bot_move);

        let record = self
            .state
            .commit_round(user_move, bot_move, outcome, &self.config);
        debug!(
            round = record.round,
            %user_move,
            %bot_move,
            %outcome,
            user_score = record.user_score,
            bot_score = record.bot_score,
            "round resolved"
        );

        let winner = self.state.winner();
        if let Some(winner) = winner {
            info!(
                %winner,
                user_score = self.state.score(Side::User),
                bot_score = self.state.score(Side::Bot),
                rounds = self.state.round_number(),
                "game finished"
            );
        }

        Ok(RoundResult {
            round_number: self.state.round_number(),
            user_move,
            bot_move,
            outcome,
            user_score: self.state.score(Side::User),
            bot_score: self.state.score(Side::Bot),
            game_over: self.state.is_over(),
            winner,
            user_bomb_used: self.state.bomb_used(Side::User),
            bot_bomb_used: self.state.bomb_used(Side::Bot),
            invalid_reason: validation.invalid_reason().cloned(),
        })
    }

    /// Discard the current game and start a fresh one.
    ///
    /// The random source carries on; it is not reseeded.
    pub fn reset_game(&mut self) -> GameSnapshot {
        info!(
            rounds_played = self.state.round_number(),
            "game reset"
        );
        self.state = GameState::new();
        self.state.snapshot()
    }
}
