//! Game session state machine
//!
//! A session moves `InProgress -> Won | Lost` and never leaves a terminal
//! state. The target word stays hidden until the session is terminal.

use crate::auth::UserId;
use crate::core::{Feedback, Word, score};
use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Maximum number of guesses per session
pub const MAX_ATTEMPTS: usize = 6;

/// Unique session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| GameError::InvalidInput(format!("malformed session id: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of applying one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub status: SessionStatus,
    pub attempts_used: usize,
    /// Only set once the session is terminal
    pub target: Option<Word>,
}

impl GuessOutcome {
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts_used)
    }
}

/// A single player's attempt at one target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    id: SessionId,
    owner: Option<UserId>,
    target: Word,
    history: Vec<GuessRecord>,
    status: SessionStatus,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl GameSession {
    #[must_use]
    pub fn new(target: Word, owner: Option<UserId>, started_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::generate(),
            owner,
            target,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            status: SessionStatus::InProgress,
            started_at,
            finished_at: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub const fn owner(&self) -> Option<UserId> {
        self.owner
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// The target word, available only once the session is terminal
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.status.is_terminal().then_some(&self.target)
    }

    pub(crate) const fn target(&self) -> &Word {
        &self.target
    }

    /// Whether `caller` may see and play this session
    ///
    /// Guest sessions are open to anyone holding the id; owned sessions only
    /// to their owner.
    #[must_use]
    pub fn visible_to(&self, caller: Option<UserId>) -> bool {
        self.owner.is_none() || self.owner == caller
    }

    /// Whole seconds between start and finish, if finished
    #[must_use]
    pub fn time_taken_seconds(&self) -> Option<u64> {
        self.finished_at
            .map(|end| u64::try_from((end - self.started_at).num_seconds()).unwrap_or(0))
    }

    /// Score `guess` and advance the state machine
    ///
    /// # Errors
    ///
    /// Returns `GameError::AlreadyCompleted` if the session is won or lost;
    /// the history is left untouched.
    pub fn apply_guess(&mut self, guess: Word, now: DateTime<Utc>) -> Result<GuessOutcome> {
        if self.status.is_terminal() {
            return Err(GameError::AlreadyCompleted(self.id));
        }

        let feedback = score(&self.target, &guess);
        let won = guess == self.target;
        self.history.push(GuessRecord { guess, feedback });

        if won {
            self.status = SessionStatus::Won;
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.status = SessionStatus::Lost;
        }

        if self.status.is_terminal() {
            self.finished_at = Some(now);
        }

        Ok(GuessOutcome {
            feedback,
            status: self.status,
            attempts_used: self.history.len(),
            target: self.revealed_target().cloned(),
        })
    }

    /// Client-facing view; omits the target while in progress
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            owner: self.owner,
            status: self.status,
            history: self.history.clone(),
            attempts_remaining: MAX_ATTEMPTS.saturating_sub(self.history.len()),
            started_at: self.started_at,
            finished_at: self.finished_at,
            target: self.revealed_target().cloned(),
        }
    }
}

/// Serializable snapshot of a session for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserId>,
    pub status: SessionStatus,
    pub history: Vec<GuessRecord>,
    pub attempts_remaining: usize,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Word>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap()
    }

    fn session(target: &str) -> GameSession {
        GameSession::new(Word::new(target).unwrap(), None, start())
    }

    fn guess(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn winning_guess_ends_session() {
        let mut s = session("abide");
        let outcome = s
            .apply_guess(guess("abide"), start() + chrono::Duration::seconds(42))
            .unwrap();

        assert_eq!(outcome.status, SessionStatus::Won);
        assert!(outcome.feedback.is_correct());
        assert_eq!(outcome.target, Some(guess("abide")));
        assert_eq!(outcome.attempts_remaining(), 5);
        assert_eq!(s.time_taken_seconds(), Some(42));
    }

    #[test]
    fn five_misses_stay_in_progress_and_hide_target() {
        let mut s = session("abide");
        for word in ["crane", "slate", "speed", "robot", "floor"] {
            let outcome = s.apply_guess(guess(word), start()).unwrap();
            assert_eq!(outcome.status, SessionStatus::InProgress);
            assert!(outcome.target.is_none());
        }

        assert_eq!(s.history().len(), 5);
        assert!(s.revealed_target().is_none());
        assert!(s.summary().target.is_none());
        assert!(s.finished_at().is_none());
    }

    #[test]
    fn sixth_miss_loses_and_reveals_target() {
        let mut s = session("abide");
        for word in ["crane", "slate", "speed", "robot", "floor"] {
            s.apply_guess(guess(word), start()).unwrap();
        }

        let outcome = s.apply_guess(guess("erase"), start()).unwrap();
        assert_eq!(outcome.status, SessionStatus::Lost);
        assert_eq!(outcome.target, Some(guess("abide")));
        assert_eq!(outcome.attempts_remaining(), 0);
        assert_eq!(s.history().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn win_on_last_attempt_is_won() {
        let mut s = session("abide");
        for word in ["crane", "slate", "speed", "robot", "floor"] {
            s.apply_guess(guess(word), start()).unwrap();
        }

        let outcome = s.apply_guess(guess("abide"), start()).unwrap();
        assert_eq!(outcome.status, SessionStatus::Won);
    }

    #[test]
    fn terminal_session_rejects_guesses_without_mutation() {
        let mut s = session("abide");
        s.apply_guess(guess("abide"), start()).unwrap();
        let before = s.clone();

        let err = s.apply_guess(guess("crane"), start()).unwrap_err();
        assert!(matches!(err, GameError::AlreadyCompleted(id) if id == s.id()));
        assert_eq!(s, before);
    }

    #[test]
    fn visibility_rules() {
        let guest = session("abide");
        assert!(guest.visible_to(None));
        assert!(guest.visible_to(Some(UserId(7))));

        let owned = GameSession::new(guess("abide"), Some(UserId(7)), start());
        assert!(owned.visible_to(Some(UserId(7))));
        assert!(!owned.visible_to(Some(UserId(8))));
        assert!(!owned.visible_to(None));
    }

    #[test]
    fn session_id_parsing() {
        let id = SessionId::generate();
        assert_eq!(id.to_string().parse::<SessionId>().unwrap(), id);
        assert!(matches!(
            "not-a-uuid".parse::<SessionId>(),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn summary_serializes_camel_case() {
        let mut s = session("abide");
        s.apply_guess(guess("crane"), start()).unwrap();

        let json = serde_json::to_value(s.summary()).unwrap();
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["attemptsRemaining"], 5);
        assert_eq!(json["history"][0]["guess"], "crane");
        assert!(json.get("target").is_none());
        assert!(json.get("owner").is_none());
    }
}
