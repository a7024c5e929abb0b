//! The two parties in a game and per-party data storage.
//!
//! ## Side
//!
//! A game always has exactly two parties: the human `User` and the `Bot`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for scores and
//! bomb-used flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::moves::Outcome;

/// One of the two parties in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    User,
    Bot,
}

impl Side {
    /// The side that scores on `outcome`, if any.
    #[must_use]
    pub const fn scoring(outcome: Outcome) -> Option<Side> {
        match outcome {
            Outcome::UserWins => Some(Side::User),
            Outcome::BotWins => Some(Side::Bot),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Side::User => "user",
            Side::Bot => "bot",
        })
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use rps_referee::core::{Side, SideMap};
///
/// let mut scores: SideMap<u8> = SideMap::default();
/// scores[Side::Bot] += 1;
///
/// assert_eq!(scores[Side::User], 0);
/// assert_eq!(scores[Side::Bot], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub user: T,
    pub bot: T,
}

impl<T> SideMap<T> {
    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::User => &self.user,
            Side::Bot => &self.bot,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::User => &mut self.user,
            Side::Bot => &mut self.bot,
        }
    }

    /// Iterate over (Side, &T) pairs, user first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::User, &self.user), (Side::Bot, &self.bot)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
