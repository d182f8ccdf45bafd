//! Live sessions keyed by room or user
//!
//! The key map sits behind a `RwLock` that is only written on create and
//! remove; each session has its own `Mutex`, so games under different keys
//! never wait on each other while guessing.

use super::{GameError, GameSession, GuessOutcome, Hint, Summary};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, TryLockError};
use std::time::Duration;

/// A session shared between the registry and its callers
pub type SharedSession = Arc<Mutex<GameSession>>;

/// At most one live session per key
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<FxHashMap<String, SharedSession>>,
}

fn lock(session: &SharedSession) -> MutexGuard<'_, GameSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Lock without waiting; `None` while another caller holds the session
fn try_lock(session: &SharedSession) -> Option<MutexGuard<'_, GameSession>> {
    match session.try_lock() {
        Ok(guard) => Some(guard),
        Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
        Err(TryLockError::WouldBlock) => None,
    }
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session under `key`
    ///
    /// A session under `key` that already ended, e.g. one finished through a
    /// handle from [`SessionRegistry::get`], is replaced.
    ///
    /// # Errors
    ///
    /// `SessionAlreadyActive` if `key` already has a live session.
    pub fn create(&self, key: &str, session: GameSession) -> Result<SharedSession, GameError> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = sessions.get(key) {
            // A session busy in another caller counts as live
            let finished = try_lock(existing).is_some_and(|s| s.status().is_terminal());
            if !finished {
                return Err(GameError::SessionAlreadyActive(key.to_string()));
            }
            tracing::debug!(key, "replacing finished session");
        }

        let shared = Arc::new(Mutex::new(session));
        sessions.insert(key.to_string(), Arc::clone(&shared));
        tracing::info!(key, live = sessions.len(), "session created");
        Ok(shared)
    }

    /// Look up the live session for `key`
    ///
    /// # Errors
    ///
    /// `SessionNotFound` if there is none.
    pub fn get(&self, key: &str) -> Result<SharedSession, GameError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or_else(|| GameError::SessionNotFound(key.to_string()))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the session for `key`
    ///
    /// Removing a key with no session is a no-op, so a timer and a final
    /// guess may race on it.
    pub fn remove(&self, key: &str) -> Option<SharedSession> {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        if removed.is_some() {
            tracing::info!(key, "session removed");
        }
        removed
    }

    /// Remove `key` only while it still maps to `session`
    fn remove_if_same(&self, key: &str, session: &SharedSession) {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        if sessions.get(key).is_some_and(|live| Arc::ptr_eq(live, session)) {
            sessions.remove(key);
            tracing::info!(key, "finished session removed");
        }
    }

    /// Guess on the session for `key`, removing it when the game ends
    ///
    /// # Errors
    ///
    /// `SessionNotFound`, or any error from [`GameSession::guess`].
    pub fn guess(&self, key: &str, word: &str) -> Result<GuessOutcome, GameError> {
        let session = self.get(key)?;
        let outcome = lock(&session).guess(word)?;
        if outcome.is_terminal() {
            self.remove_if_same(key, &session);
        }
        Ok(outcome)
    }

    /// Take a hint on the session for `key`
    ///
    /// # Errors
    ///
    /// `SessionNotFound`, or any error from [`GameSession::hint`].
    pub fn hint(&self, key: &str) -> Result<Hint, GameError> {
        let session = self.get(key)?;
        lock(&session).hint()
    }

    /// Stop and remove the session for `key`
    ///
    /// # Errors
    ///
    /// `SessionNotFound` if there is none.
    pub fn stop(&self, key: &str) -> Result<Summary, GameError> {
        let session = self.get(key)?;
        let summary = lock(&session).stop();
        self.remove_if_same(key, &session);
        Ok(summary)
    }

    /// Stop and remove every session idle for longer than `max_idle`
    ///
    /// Meant to be driven by an external timer. A session locked by another
    /// caller is in use and is skipped.
    pub fn sweep_idle(&self, max_idle: Duration) -> Vec<(String, Summary)> {
        let live: Vec<(String, SharedSession)> = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(key, session)| (key.clone(), Arc::clone(session)))
            .collect();

        live.into_iter()
            .filter_map(|(key, session)| {
                let summary = {
                    let mut guard = try_lock(&session)?;
                    if guard.idle_for() <= max_idle {
                        return None;
                    }
                    guard.stop()
                };
                self.remove_if_same(&key, &session);
                tracing::info!(key = %key, "session timed out");
                Some((key, summary))
            })
            .collect()
    }

    /// Stop and remove every session
    pub fn teardown(&self) -> Vec<(String, Summary)> {
        let drained: Vec<(String, SharedSession)> = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .collect();

        drained
            .into_iter()
            .map(|(key, session)| {
                let summary = lock(&session).stop();
                (key, summary)
            })
            .collect()
    }
}
