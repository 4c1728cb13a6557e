//! Score command
//!
//! Scores one guess against a chosen target without starting a session.

use crate::core::{GuessCheck, Word, check_guess};
use crate::error::Result;

/// Result of scoring a guess
pub struct ScoreResult {
    pub target: Word,
    pub guess: Word,
    pub check: GuessCheck,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if either word is not five ASCII letters.
pub fn score_words(target: &str, guess: &str) -> Result<ScoreResult> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    let check = check_guess(&target, &guess);

    Ok(ScoreResult {
        target,
        guess,
        check,
    })
}
