//! Word lists for target selection
//!
//! Provides the embedded word list compiled into the binary and the
//! process-wide, read-only `WordList` built from it (or from a file).

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::error::{GameError, Result};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Immutable, de-duplicated list of candidate target words
///
/// Loaded once at startup and shared (typically behind an `Arc`) by every
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from words, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if no words remain.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(GameError::InvalidInput("word list is empty".to_string()));
        }

        Ok(Self { words })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded list contains no valid words.
    pub fn embedded() -> Result<Self> {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Load a list from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns `GameError::Persistence` if the file cannot be read and
    /// `GameError::InvalidInput` if it holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|e| {
            GameError::persistence(format!("reading word list {}", path.display()), e)
        })?;
        Self::new(words)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // All embedded words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_has_no_duplicates() {
        let list = WordList::embedded().unwrap();
        assert_eq!(list.len(), WORDS_COUNT);
        assert!(list.contains(&Word::new("abide").unwrap()));
    }

    #[test]
    fn new_deduplicates_preserving_order() {
        let words = ["slate", "crane", "SLATE", "irate", "crane"]
            .into_iter()
            .map(|w| Word::new(w).unwrap());
        let list = WordList::new(words).unwrap();

        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "irate"]);
        assert_eq!(list.get(1).map(Word::text), Some("crane"));
        assert!(list.get(3).is_none());
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(
            WordList::new(Vec::new()),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_file_with_only_invalid_lines_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "ab\n12345\n").unwrap();

        assert!(matches!(
            WordList::from_file(&path),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_missing_file_is_persistence_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            WordList::from_file(dir.path().join("nope.txt")),
            Err(GameError::Persistence { .. })
        ));
    }
}
