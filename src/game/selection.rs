//! Target word selection
//!
//! Two policies draw from the shared, read-only `WordList`:
//! - `Daily`: every session started on the same UTC calendar day gets the
//!   same word
//! - `Random`: an independent uniform choice per session

use crate::core::Word;
use crate::wordlists::WordList;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::Rng;
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// How a new session's target is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    #[default]
    Daily,
    Random,
}

/// Proleptic Gregorian day number, with 0001-01-01 as day 1
#[must_use]
pub fn day_ordinal(date: NaiveDate) -> u64 {
    // Dates before year 1 are clamped to day 0
    u64::try_from(date.num_days_from_ce()).unwrap_or(0)
}

/// Index of the daily word for `date` in a list of `len` words
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (day_ordinal(date) % len as u64) as usize
}

/// Picks target words according to a policy
#[derive(Debug, Clone)]
pub struct WordPicker {
    words: Arc<WordList>,
    policy: SelectionPolicy,
}

impl WordPicker {
    #[must_use]
    pub const fn new(words: Arc<WordList>, policy: SelectionPolicy) -> Self {
        Self { words, policy }
    }

    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Word for the UTC calendar day containing `now`
    #[must_use]
    pub fn daily(&self, now: DateTime<Utc>) -> &Word {
        self.daily_for_date(now.date_naive())
    }

    #[must_use]
    pub fn daily_for_date(&self, date: NaiveDate) -> &Word {
        let words = self.words.as_slice();
        &words[daily_index(date, words.len())]
    }

    /// Pick a target for a session started at `now`
    #[must_use]
    pub fn pick(&self, now: DateTime<Utc>) -> Word {
        self.pick_with_rng(now, &mut rand::rng())
    }

    pub fn pick_with_rng<R: Rng + ?Sized>(&self, now: DateTime<Utc>, rng: &mut R) -> Word {
        match self.policy {
            SelectionPolicy::Daily => self.daily(now).clone(),
            SelectionPolicy::Random => self
                .words
                .as_slice()
                .choose(rng)
                .unwrap_or_else(|| self.daily(now))
                .clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn picker(policy: SelectionPolicy) -> WordPicker {
        let words = ["abide", "crane", "slate", "speed", "erase"]
            .into_iter()
            .map(|w| Word::new(w).unwrap());
        WordPicker::new(Arc::new(WordList::new(words).unwrap()), policy)
    }

    #[test]
    fn ordinal_matches_proleptic_gregorian_count() {
        assert_eq!(day_ordinal(NaiveDate::from_ymd_opt(1, 1, 1).unwrap()), 1);
        assert_eq!(day_ordinal(NaiveDate::from_ymd_opt(1, 12, 31).unwrap()), 365);
        assert_eq!(
            day_ordinal(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            738_886
        );
    }

    #[test]
    fn daily_word_uses_ordinal_modulo_length() {
        let picker = picker(SelectionPolicy::Daily);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        // 738_886 % 5 == 1
        assert_eq!(picker.daily_for_date(date).text(), "crane");
        assert_eq!(
            picker.daily_for_date(date.succ_opt().unwrap()).text(),
            "slate"
        );
    }

    #[test]
    fn daily_word_constant_within_utc_day() {
        let picker = picker(SelectionPolicy::Daily);
        let morning = Utc.with_ymd_and_hms(2026, 10, 14, 0, 0, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2026, 10, 14, 23, 59, 59).unwrap();
        let next = Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 0).unwrap();

        assert_eq!(picker.pick(morning), picker.pick(night));
        assert_ne!(picker.pick(night), picker.pick(next));
    }

    #[test]
    fn random_policy_draws_from_list() {
        let picker = picker(SelectionPolicy::Random);
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();

        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..200 {
            let word = picker.pick_with_rng(now, &mut rng);
            assert!(picker.words().contains(&word));
            seen.insert(word);
        }

        // 200 uniform draws over 5 words hit every word
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn daily_index_empty_list() {
        assert_eq!(daily_index(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), 0), 0);
    }
}
