//! Persistence seams
//!
//! The game and account layers talk to storage only through these traits.
//! In-memory implementations live in [`memory`]; append-only JSON-lines files
//! in [`jsonl`].

pub mod jsonl;
pub mod memory;

pub use jsonl::{JsonlResultStore, JsonlUserStore};
pub use memory::{MemoryResultStore, MemorySessionStore, MemoryUserStore};

use crate::auth::{NewUser, User, UserId};
use crate::core::Word;
use crate::game::{GameResult, GameSession, NewResult, SessionId};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Low-level storage failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt record at line {line}: {source}")]
    Corrupt {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("duplicate {field}")]
    Duplicate { field: &'static str },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Live game sessions
///
/// `update` is the only way to change a stored session and runs the closure
/// under that session's exclusive lock, so concurrent guesses against one
/// session are applied one at a time.
pub trait SessionStore: Send + Sync {
    /// # Errors
    /// Returns `StoreError` if the session cannot be stored.
    fn create(
        &self,
        target: Word,
        owner: Option<UserId>,
        started_at: DateTime<Utc>,
    ) -> Result<SessionId, StoreError>;

    /// Snapshot of a session, if it exists
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read.
    fn get(&self, id: SessionId) -> Result<Option<GameSession>, StoreError>;

    /// Atomic read-modify-write; `Ok(None)` if no such session exists
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be accessed.
    fn update<T, F>(&self, id: SessionId, f: F) -> Result<Option<T>, StoreError>
    where
        F: FnOnce(&mut GameSession) -> T;

    /// Sessions belonging to `owner` (guest sessions for `None`), oldest first
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read.
    fn list(&self, owner: Option<UserId>) -> Result<Vec<GameSession>, StoreError>;
}

/// Append-only game results
pub trait ResultStore: Send + Sync {
    /// # Errors
    /// Returns `StoreError` if the write fails; the result is then not stored.
    fn append(&self, result: NewResult) -> Result<GameResult, StoreError>;

    /// Results belonging to `owner` (guest results for `None`), in append order
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read.
    fn list(&self, owner: Option<UserId>) -> Result<Vec<GameResult>, StoreError>;
}

/// Registered accounts
pub trait UserStore: Send + Sync {
    /// Insert a user, enforcing unique username and email
    ///
    /// # Errors
    /// Returns `StoreError::Duplicate` on a uniqueness violation, or another
    /// `StoreError` if the write fails.
    fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// Case-insensitive lookup by username
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read.
    fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Case-insensitive lookup by email
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read.
    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// Shared uniqueness check for user stores
fn check_unique(existing: &[User], candidate: &NewUser) -> Result<(), StoreError> {
    if existing
        .iter()
        .any(|u| u.username.eq_ignore_ascii_case(&candidate.username))
    {
        return Err(StoreError::Duplicate { field: "username" });
    }
    if existing
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(&candidate.email))
    {
        return Err(StoreError::Duplicate { field: "email" });
    }
    Ok(())
}
