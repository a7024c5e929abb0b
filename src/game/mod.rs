//! The game state machine: one owned game per [`Referee`].
//!
//! `IN_PROGRESS` until the round limit is reached or a side clinches,
//! then `GAME_OVER` until `reset_game`.

mod referee;
mod state;

pub use referee::Referee;
pub use state::{GameSnapshot, GameState, RoundRecord, RoundResult};
