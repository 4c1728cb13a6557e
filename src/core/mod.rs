//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, GuessCheck, LetterStatus, check_guess, score};
pub use word::{WORD_LENGTH, Word, WordError};
