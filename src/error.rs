//! Error taxonomy for the game backend
//!
//! Every fallible library operation returns `GameError`. Each variant maps
//! onto one class of caller-visible failure.

use crate::core::WordError;
use crate::game::SessionId;
use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced to callers of the game and account APIs
#[derive(Debug, Error)]
pub enum GameError {
    /// Malformed guess, word, payload or field value; nothing was changed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No session with this id is visible to the caller
    #[error("session {0} not found")]
    NotFound(SessionId),

    /// The session is already won or lost
    #[error("session {0} is already completed")]
    AlreadyCompleted(SessionId),

    /// Username or email is already registered
    #[error("already registered: {0}")]
    Conflict(String),

    /// Unknown user, wrong password, or unknown token
    #[error("invalid credentials")]
    Unauthorized,

    /// The backing store could not be read or written
    #[error("persistence failure while {context}: {source}")]
    Persistence {
        context: String,
        #[source]
        source: StoreError,
    },
}

impl GameError {
    pub fn persistence(context: impl Into<String>, source: impl Into<StoreError>) -> Self {
        Self::Persistence {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Short machine-readable code for payloads and logs
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::AlreadyCompleted(_) => "already_completed",
            Self::Conflict(_) => "conflict",
            Self::Unauthorized => "unauthorized",
            Self::Persistence { .. } => "persistence_failure",
        }
    }
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Result alias used throughout the library
pub type Result<T, E = GameError> = std::result::Result<T, E>;
