//! Guess feedback calculation and representation
//!
//! Feedback is one `LetterStatus` per position:
//! - `Correct` = letter in the correct position
//! - `Present` = letter appears elsewhere among the unmatched target letters
//! - `Absent` = letter does not appear among the unmatched target letters

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for a guess, in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All letters in the correct position
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.0.iter().all(|&status| status == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|status| status.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score `guess` against `target`
///
/// Implements exact multiset semantics for repeated letters: a target letter
/// can satisfy at most one guessed letter.
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and consume the target slot
/// 2. Second pass: for each remaining guess letter, consume the first
///    unconsumed target slot holding the same letter and mark `Present`,
///    otherwise mark `Absent`
///
/// # Examples
/// ```
/// use wordle_backend::core::{score, LetterStatus::*, Word};
///
/// let target = Word::new("abide").unwrap();
/// let guess = Word::new("speed").unwrap();
///
/// // Only one E in ABIDE, so only one E in SPEED is marked
/// assert_eq!(score(&target, &guess).statuses(), &[Absent, Absent, Present, Absent, Present]);
/// ```
#[must_use]
pub fn score(target: &Word, guess: &Word) -> Feedback {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];
    let mut available: [Option<u8>; WORD_LENGTH] = (*target.chars()).map(Some);

    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            result[i] = LetterStatus::Correct;
            available[i] = None;
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(slot) = available.iter_mut().find(|slot| **slot == Some(g)) {
            *slot = None;
            result[i] = LetterStatus::Present;
        }
    }

    Feedback(result)
}

/// Stateless guess check: feedback plus whole-word equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessCheck {
    #[serde(rename = "result")]
    pub feedback: Feedback,
    pub is_correct: bool,
}

/// Score a guess without any session state
#[must_use]
pub fn check_guess(target: &Word, guess: &Word) -> GuessCheck {
    GuessCheck {
        feedback: score(target, guess),
        is_correct: guess == target,
    }
}
