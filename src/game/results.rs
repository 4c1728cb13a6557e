//! Game result records
//!
//! Results are append-only: created once, when a session ends or when a
//! client reports a finished game, and never updated.

use super::session::GameSession;
use crate::auth::UserId;
use crate::core::Word;
use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted game outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub id: u64,
    pub word: Word,
    pub guess_count: u32,
    pub won: bool,
    pub time_taken_seconds: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

/// A validated result waiting for the store to assign an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResult {
    pub word: Word,
    pub guess_count: u32,
    pub won: bool,
    pub time_taken_seconds: u64,
    pub owner: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl NewResult {
    /// Derive the result of a terminal session; `None` while in progress
    #[must_use]
    pub fn from_session(session: &GameSession) -> Option<Self> {
        // Only terminal sessions carry a finish time
        let finished_at = session.finished_at()?;
        let status = session.status();

        Some(Self {
            word: session.target().clone(),
            guess_count: u32::try_from(session.history().len()).unwrap_or(u32::MAX),
            won: status == super::SessionStatus::Won,
            time_taken_seconds: session.time_taken_seconds().unwrap_or(0),
            owner: session.owner(),
            created_at: finished_at,
        })
    }

    #[must_use]
    pub fn with_id(self, id: u64) -> GameResult {
        GameResult {
            id,
            word: self.word,
            guess_count: self.guess_count,
            won: self.won,
            time_taken_seconds: self.time_taken_seconds,
            owner: self.owner,
            created_at: self.created_at,
        }
    }
}

/// A client-reported game outcome, as received
///
/// Accepts both `word`/`guessCount` and the older `wordId`/`guesses` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSubmission {
    #[serde(alias = "wordId")]
    pub word: String,
    #[serde(alias = "guesses")]
    pub guess_count: i64,
    pub won: bool,
    pub time_taken: i64,
}

impl ResultSubmission {
    /// Parse a JSON payload
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` for malformed JSON, missing fields,
    /// or fields of the wrong type.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|e| GameError::InvalidInput(format!("malformed result payload: {e}")))
    }

    /// Check field values and attach the caller and creation time
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if the word is not a valid word or a
    /// count is negative.
    pub fn validate(self, owner: Option<UserId>, now: DateTime<Utc>) -> Result<NewResult> {
        let word = Word::new(self.word)?;

        let guess_count = u32::try_from(self.guess_count).map_err(|_| {
            GameError::InvalidInput(format!(
                "guess count must be a non-negative integer, got {}",
                self.guess_count
            ))
        })?;

        let time_taken_seconds = u64::try_from(self.time_taken).map_err(|_| {
            GameError::InvalidInput(format!(
                "time taken must be a non-negative integer, got {}",
                self.time_taken
            ))
        })?;

        Ok(NewResult {
            word,
            guess_count,
            won: self.won,
            time_taken_seconds,
            owner,
            created_at: now,
        })
    }
}
