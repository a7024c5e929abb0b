//! Session-keyed games.
//!
//! Each session owns an independent [`Referee`] behind its own mutex, so a
//! session's rounds never interleave while different sessions proceed in
//! parallel. The registry's map lock is only held long enough to look up or
//! insert a handle.
//!
//! Each new game draws from a fork of the registry's master RNG. The master
//! is seeded from entropy unless the config fixes a seed, in which case
//! whole-registry runs are reproducible.
//!
//! Restarting a session swaps the game inside its existing mutex, so a
//! round racing with the restart is ordered against it instead of landing
//! on a discarded game.

use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::{ConfigError, GameError, GameRng, RefereeConfig, SessionId};
use crate::game::{GameSnapshot, Referee, RoundResult};
use crate::rules::ValidationResult;

/// A session's game, shareable across threads.
pub type SharedReferee = Arc<Mutex<Referee>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic mid-round cannot leave a half-applied round: state is only
    // touched after every fallible step.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Games keyed by session.
#[derive(Debug)]
pub struct SessionRegistry {
    config: RefereeConfig,
    master_rng: Mutex<GameRng>,
    sessions: RwLock<FxHashMap<SessionId, SharedReferee>>,
}

impl SessionRegistry {
    /// Create an empty registry. Every session uses `config`.
    pub fn new(config: RefereeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let master_rng = config.build_rng();
        debug!(seed = master_rng.seed(), "session registry seeded");
        Ok(Self {
            master_rng: Mutex::new(master_rng),
            config,
            sessions: RwLock::new(FxHashMap::default()),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RefereeConfig {
        &self.config
    }

    fn fresh_referee(&self) -> Referee {
        let rng = lock(&self.master_rng).fork();
        Referee::from_validated(self.config.clone(), rng)
    }

    /// Mint a new session id and start a game for it.
    pub fn open(&self) -> SessionId {
        let id = SessionId::generate(&mut lock(&self.master_rng));
        self.start(&id);
        id
    }

    /// Look up a session's game.
    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<SharedReferee> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Look up a session's game, creating it on first use.
    pub fn get_or_create(&self, id: &SessionId) -> SharedReferee {
        if let Some(existing) = self.get(id) {
            return existing;
        }

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have inserted while we waited for the write lock.
        if let Some(existing) = sessions.get(id) {
            return Arc::clone(existing);
        }
        let referee = Arc::new(Mutex::new(self.fresh_referee()));
        sessions.insert(id.clone(), Arc::clone(&referee));
        info!(session = %id, "session created");
        referee
    }

    /// Install a brand-new game for the session, replacing any existing one.
    ///
    /// An existing session keeps its handle; the game behind it is swapped
    /// under the session lock.
    pub fn start(&self, id: &SessionId) -> GameSnapshot {
        let fresh = self.fresh_referee();
        let snapshot = fresh.get_state();

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let referee = match sessions.entry(id.clone()) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(fresh)));
                info!(session = %id, replaced = false, "game started");
                return snapshot;
            }
        };
        drop(sessions);

        *lock(&referee) = fresh;
        info!(session = %id, replaced = true, "game started");
        snapshot
    }

    /// Run `f` on the session's game while holding its lock.
    pub fn with_session<T>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&mut Referee) -> T,
    ) -> Result<T, GameError> {
        let referee = self
            .get(id)
            .ok_or_else(|| GameError::UnknownSession(id.clone()))?;
        let mut guard = lock(&referee);
        Ok(f(&mut *guard))
    }

    pub fn get_state(&self, id: &SessionId) -> Result<GameSnapshot, GameError> {
        self.with_session(id, |referee| referee.get_state())
    }

    pub fn validate_move_for_user(
        &self,
        id: &SessionId,
        raw_input: &str,
    ) -> Result<ValidationResult, GameError> {
        self.with_session(id, |referee| referee.validate_move_for_user(raw_input))
    }

    /// Play a round in the session's game, creating the game on first use.
    pub fn play_round(&self, id: &SessionId, raw_user_input: &str) -> Result<RoundResult, GameError> {
        let referee = self.get_or_create(id);
        let mut guard = lock(&referee);
        guard.play_round(raw_user_input)
    }

    /// Reset the session's game, creating it on first use. Never fails.
    pub fn reset_game(&self, id: &SessionId) -> GameSnapshot {
        let referee = self.get_or_create(id);
        let mut guard = lock(&referee);
        guard.reset_game()
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove(&self, id: &SessionId) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some();
        if removed {
            info!(session = %id, "session removed");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
