//! In-memory stores
//!
//! Sessions are kept one mutex per session so that guesses for different
//! sessions never contend; the map lock is held only for lookup and insert.

use super::{ResultStore, SessionStore, StoreError, UserStore, check_unique};
use crate::auth::{NewUser, User, UserId};
use crate::core::Word;
use crate::game::{GameResult, GameSession, NewResult, SessionId};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<FxHashMap<SessionId, Arc<Mutex<GameSession>>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self, id: SessionId) -> Option<Arc<Mutex<GameSession>>> {
        self.sessions.read().get(&id).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn create(
        &self,
        target: Word,
        owner: Option<UserId>,
        started_at: DateTime<Utc>,
    ) -> Result<SessionId, StoreError> {
        let session = GameSession::new(target, owner, started_at);
        let id = session.id();
        self.sessions
            .write()
            .insert(id, Arc::new(Mutex::new(session)));
        Ok(id)
    }

    fn get(&self, id: SessionId) -> Result<Option<GameSession>, StoreError> {
        Ok(self.handle(id).map(|session| session.lock().clone()))
    }

    fn update<T, F>(&self, id: SessionId, f: F) -> Result<Option<T>, StoreError>
    where
        F: FnOnce(&mut GameSession) -> T,
    {
        let Some(session) = self.handle(id) else {
            return Ok(None);
        };
        let mut guard = session.lock();
        Ok(Some(f(&mut *guard)))
    }

    fn list(&self, owner: Option<UserId>) -> Result<Vec<GameSession>, StoreError> {
        let handles: Vec<_> = self.sessions.read().values().cloned().collect();
        let mut sessions: Vec<GameSession> = handles
            .iter()
            .map(|session| session.lock().clone())
            .filter(|session| session.owner() == owner)
            .collect();
        sessions.sort_by_key(GameSession::started_at);
        Ok(sessions)
    }
}

#[derive(Debug, Default)]
pub struct MemoryResultStore {
    results: Mutex<Vec<GameResult>>,
}

impl MemoryResultStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryResultStore {
    fn append(&self, result: NewResult) -> Result<GameResult, StoreError> {
        let mut results = self.results.lock();
        let stored = result.with_id(results.len() as u64 + 1);
        results.push(stored.clone());
        Ok(stored)
    }

    fn list(&self, owner: Option<UserId>) -> Result<Vec<GameResult>, StoreError> {
        Ok(self
            .results
            .lock()
            .iter()
            .filter(|r| r.owner == owner)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock();
        check_unique(&users, &user)?;
        let stored = user.with_id(UserId(users.len() as u64 + 1));
        users.push(stored.clone());
        Ok(stored)
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}
