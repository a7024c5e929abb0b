//! Referee configuration.
//!
//! Defaults describe the classic game: best of 3, first to 2 round wins
//! ends the game early, and the bot reaches for its bomb 15% of the time
//! while it still has one. Without a seed the bot is seeded from OS
//! entropy, so no two games share a move sequence.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::GameRng;

/// Configuration for a refereed game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefereeConfig {
    /// Rounds after which the game ends regardless of score.
    pub max_rounds: u8,

    /// Round wins that end the game early.
    /// Equal to `max_rounds` effectively disables early termination.
    pub wins_to_clinch: u8,

    /// Probability that the bot substitutes its bomb for a basic move
    /// while the bomb is still available.
    pub bot_bomb_chance: f64,

    /// Seed for the bot's RNG. `None` draws a fresh seed from entropy.
    pub seed: Option<u64>,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            wins_to_clinch: 2,
            bot_bomb_chance: 0.15,
            seed: None,
        }
    }
}

impl RefereeConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.wins_to_clinch == 0 || self.wins_to_clinch > self.max_rounds {
            return Err(ConfigError::ClinchOutOfRange {
                wins: self.wins_to_clinch,
                rounds: self.max_rounds,
            });
        }
        if !(0.0..=1.0).contains(&self.bot_bomb_chance) {
            return Err(ConfigError::InvalidBombChance(self.bot_bomb_chance));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u8) -> Self {
        self.max_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_wins_to_clinch(mut self, wins: u8) -> Self {
        self.wins_to_clinch = wins;
        self
    }

    #[must_use]
    pub fn with_bot_bomb_chance(mut self, chance: f64) -> Self {
        self.bot_bomb_chance = chance;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The bot's RNG: seeded when a seed is configured, from entropy
    /// otherwise.
    #[must_use]
    pub fn build_rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}
