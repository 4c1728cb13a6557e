//! Game service
//!
//! Glues word selection, the session state machine and result recording
//! together behind the request shapes clients use.

use super::results::{NewResult, ResultSubmission};
use super::selection::{Clock, SystemClock, WordPicker};
use super::session::{GuessOutcome, MAX_ATTEMPTS, SessionId, SessionSummary};
use crate::auth::UserId;
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::error::{GameError, Result};
use crate::stats::PlayerStats;
use crate::store::{ResultStore, SessionStore, StoreError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    pub session_id: SessionId,
    pub word_length: usize,
    pub max_attempts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub session_id: SessionId,
    pub guess: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub feedback: Feedback,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub won: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Word>,
    pub attempts_remaining: usize,
}

impl From<GuessOutcome> for GuessResponse {
    fn from(outcome: GuessOutcome) -> Self {
        let completed = outcome.status.is_terminal();
        Self {
            feedback: outcome.feedback,
            completed,
            won: completed.then_some(outcome.status == super::SessionStatus::Won),
            attempts_remaining: outcome.attempts_remaining(),
            target: outcome.target,
        }
    }
}

/// Acknowledgement of a stored write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub message: String,
}

/// Request-level game operations
pub struct GameService<S: SessionStore, R: ResultStore> {
    picker: WordPicker,
    sessions: S,
    results: R,
    clock: Arc<dyn Clock>,
}

impl<S: SessionStore, R: ResultStore> GameService<S, R> {
    pub fn new(picker: WordPicker, sessions: S, results: R) -> Self {
        Self {
            picker,
            sessions,
            results,
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub const fn picker(&self) -> &WordPicker {
        &self.picker
    }

    /// Start a new session for `owner` (or a guest)
    ///
    /// # Errors
    ///
    /// Returns `GameError::Persistence` if the session cannot be stored.
    pub fn start_session(&self, owner: Option<UserId>) -> Result<StartSessionResponse> {
        let now = self.clock.now();
        let target = self.picker.pick(now);
        let session_id = self
            .sessions
            .create(target, owner, now)
            .map_err(|e| store_failure("creating session", e))?;

        info!(%session_id, owner = ?owner, policy = ?self.picker.policy(), "started session");
        Ok(StartSessionResponse {
            session_id,
            word_length: WORD_LENGTH,
            max_attempts: MAX_ATTEMPTS,
        })
    }

    /// Score a guess and advance the session
    ///
    /// The guess, the state transition and (on a terminal transition) the
    /// result record are applied together under the session's lock: if the
    /// result cannot be stored the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidInput` if the guess is not five letters
    /// - `GameError::NotFound` if the session does not exist or belongs to
    ///   another user
    /// - `GameError::AlreadyCompleted` if the session is won or lost
    /// - `GameError::Persistence` if a store read or write fails
    pub fn submit_guess(
        &self,
        owner: Option<UserId>,
        session_id: SessionId,
        guess: &str,
    ) -> Result<GuessResponse> {
        let guess = Word::new(guess)?;
        let now = self.clock.now();

        let applied = self
            .sessions
            .update(session_id, |session| {
                if !session.visible_to(owner) {
                    return Err(GameError::NotFound(session_id));
                }

                let mut next = session.clone();
                let outcome = next.apply_guess(guess, now)?;

                if let Some(result) = NewResult::from_session(&next) {
                    let stored = self
                        .results
                        .append(result)
                        .map_err(|e| store_failure("recording session result", e))?;
                    info!(
                        %session_id,
                        result_id = stored.id,
                        status = ?outcome.status,
                        attempts = outcome.attempts_used,
                        "session finished"
                    );
                }

                *session = next;
                Ok(outcome)
            })
            .map_err(|e| store_failure("updating session", e))?;

        let outcome = applied.ok_or(GameError::NotFound(session_id))??;
        debug!(
            %session_id,
            attempts = outcome.attempts_used,
            feedback = %outcome.feedback,
            "scored guess"
        );
        Ok(outcome.into())
    }

    /// Payload form of [`Self::submit_guess`]
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit_guess`].
    pub fn handle_guess(
        &self,
        owner: Option<UserId>,
        request: &GuessRequest,
    ) -> Result<GuessResponse> {
        self.submit_guess(owner, request.session_id, &request.guess)
    }

    /// Record a client-reported result
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` for invalid field values and
    /// `GameError::Persistence` if the write fails.
    pub fn submit_result(
        &self,
        owner: Option<UserId>,
        submission: ResultSubmission,
    ) -> Result<Ack> {
        let result = submission.validate(owner, self.clock.now())?;
        let stored = self
            .results
            .append(result)
            .map_err(|e| store_failure("recording reported result", e))?;

        info!(result_id = stored.id, owner = ?owner, won = stored.won, "recorded reported result");
        Ok(Ack {
            message: "Game result saved".to_string(),
        })
    }

    /// Snapshot of one session visible to `owner`
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotFound` if the session does not exist or is not
    /// visible to `owner`.
    pub fn session(&self, owner: Option<UserId>, session_id: SessionId) -> Result<SessionSummary> {
        self.sessions
            .get(session_id)
            .map_err(|e| store_failure("loading session", e))?
            .filter(|session| session.visible_to(owner))
            .map(|session| session.summary())
            .ok_or(GameError::NotFound(session_id))
    }

    /// All sessions belonging to `owner`, oldest first
    ///
    /// # Errors
    ///
    /// Returns `GameError::Persistence` if the store cannot be read.
    pub fn sessions(&self, owner: Option<UserId>) -> Result<Vec<SessionSummary>> {
        let sessions = self
            .sessions
            .list(owner)
            .map_err(|e| store_failure("listing sessions", e))?;
        Ok(sessions.iter().map(super::GameSession::summary).collect())
    }

    /// Statistics over every recorded result for `owner`
    ///
    /// # Errors
    ///
    /// Returns `GameError::Persistence` if the store cannot be read.
    pub fn stats(&self, owner: Option<UserId>) -> Result<PlayerStats> {
        let results = self
            .results
            .list(owner)
            .map_err(|e| store_failure("loading results", e))?;
        Ok(PlayerStats::from_results(&results))
    }
}

fn store_failure(context: &'static str, source: StoreError) -> GameError {
    error!(context, "store operation failed: {source}");
    GameError::persistence(context, source)
}
