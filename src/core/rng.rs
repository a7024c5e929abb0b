//! Random sources for bot move selection.
//!
//! ## Key Features
//!
//! - **Injectable**: the rules only ever see the [`RandomSource`] trait
//! - **Deterministic**: same seed produces identical bot play
//! - **Unpredictable by default**: [`GameRng::from_entropy`] for live games
//! - **Forkable**: session registries hand each game its own stream
//! - **Scriptable**: [`ScriptedRandom`] replays exact draws for tests
//!
//! ## Usage
//!
//! ```
//! use rps_referee::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! assert_eq!(rng.pick_index(3), again.pick_index(3));
//!
//! // Forks are deterministic too
//! let mut fork = rng.fork();
//! let mut fork_again = again.fork();
//! assert_eq!(fork.pick_index(100), fork_again.pick_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

use super::moves::Move;

/// Source of the randomness consumed by bot move selection.
///
/// Implementations must be cheap to call; the rules draw at most two
/// values per round.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is always non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// `true` with the given probability. Values outside `[0, 1]` are
    /// clamped; NaN never hits.
    fn chance(&mut self, probability: f64) -> bool;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG with a fresh seed drawn from OS entropy.
    ///
    /// The chosen seed is still recorded, so a game can be replayed from
    /// [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Raw 64 random bits.
    pub fn next_u64(&mut self) -> u64 {
        self.inner.gen()
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        // gen_bool asserts its argument lies in [0, 1].
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.inner.gen_bool(probability)
    }
}

/// Replays queued draws instead of generating them.
///
/// Index draws and chance draws are queued separately. An exhausted queue
/// yields `0` / `false`, i.e. rock without a bomb.
///
/// ```
/// use rps_referee::core::{Move, ScriptedRandom};
/// use rps_referee::rules::select_bot_move;
///
/// let mut rng = ScriptedRandom::from_bot_moves(&[Move::Paper, Move::Bomb, Move::Rock]);
///
/// assert_eq!(select_bot_move(true, 0.15, &mut rng), Move::Paper);
/// assert_eq!(select_bot_move(true, 0.15, &mut rng), Move::Bomb);
/// assert_eq!(select_bot_move(false, 0.15, &mut rng), Move::Rock);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    indices: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the draws that make the bot play `moves` in order.
    ///
    /// Assumes the bot only consults the bomb chance while its bomb is
    /// unspent, which is how the referee drives selection. `Invalid`
    /// entries are skipped.
    #[must_use]
    pub fn from_bot_moves(moves: &[Move]) -> Self {
        let mut scripted = Self::new();
        let mut bomb_spent = false;

        for &mv in moves {
            match mv {
                Move::Bomb => {
                    scripted.indices.push_back(0);
                    scripted.chances.push_back(true);
                    bomb_spent = true;
                }
                Move::Invalid => {}
                basic => {
                    let index = Move::BASIC.iter().position(|&m| m == basic).unwrap_or(0);
                    scripted.indices.push_back(index);
                    if !bomb_spent {
                        scripted.chances.push_back(false);
                    }
                }
            }
        }

        scripted
    }

    /// Queue an index draw.
    #[must_use]
    pub fn then_index(mut self, index: usize) -> Self {
        self.indices.push_back(index);
        self
    }

    /// Queue a chance draw.
    #[must_use]
    pub fn then_chance(mut self, hit: bool) -> Self {
        self.chances.push_back(hit);
        self
    }

    /// Draws not yet consumed, as (indices, chances).
    #[must_use]
    pub fn remaining(&self) -> (usize, usize) {
        (self.indices.len(), self.chances.len())
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len.max(1)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
