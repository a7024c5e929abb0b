//! Core types: moves, sides, RNG, configuration, errors, session ids.
//!
//! Everything here is shared by the rules, the state machine and the
//! outer surfaces; none of it holds game state.

pub mod moves;
pub mod side;
pub mod rng;
pub mod config;
pub mod error;
pub mod session;

pub use moves::{Move, Outcome, ParseMoveError, Winner};
pub use side::{Side, SideMap};
pub use rng::{GameRng, RandomSource, ScriptedRandom};
pub use config::RefereeConfig;
pub use error::{ConfigError, GameError};
pub use session::SessionId;
