//! Player statistics derived from recorded results

use crate::game::{GameResult, MAX_ATTEMPTS};
use serde::Serialize;

/// Aggregate statistics for one player (or for all guests)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub games_played: usize,
    pub games_won: usize,
    pub win_percentage: f64,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Won games by guess count; index 0 is a one-guess win
    pub guess_distribution: [usize; MAX_ATTEMPTS],
    pub average_time_seconds: f64,
}

impl PlayerStats {
    /// Aggregate results; order does not matter
    #[must_use]
    pub fn from_results(results: &[GameResult]) -> Self {
        let mut ordered: Vec<&GameResult> = results.iter().collect();
        ordered.sort_by_key(|r| (r.created_at, r.id));

        let mut stats = Self {
            games_played: ordered.len(),
            ..Self::default()
        };
        let mut total_time: u64 = 0;

        for result in &ordered {
            total_time = total_time.saturating_add(result.time_taken_seconds);

            if result.won {
                stats.games_won += 1;
                stats.current_streak += 1;
                stats.max_streak = stats.max_streak.max(stats.current_streak);

                // Client-reported counts outside 1..=6 are not charted
                let guesses = result.guess_count as usize;
                if (1..=MAX_ATTEMPTS).contains(&guesses) {
                    stats.guess_distribution[guesses - 1] += 1;
                }
            } else {
                stats.current_streak = 0;
            }
        }

        if stats.games_played > 0 {
            stats.win_percentage = stats.games_won as f64 * 100.0 / stats.games_played as f64;
            stats.average_time_seconds = total_time as f64 / stats.games_played as f64;
        }

        stats
    }

    /// Largest bucket in the distribution, for scaling bars
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::NewResult;
    use chrono::{Duration, TimeZone, Utc};

    fn result(id: u64, won: bool, guesses: u32, time: u64) -> GameResult {
        NewResult {
            word: Word::new("abide").unwrap(),
            guess_count: guesses,
            won,
            time_taken_seconds: time,
            owner: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
                + Duration::days(id as i64),
        }
        .with_id(id)
    }

    #[test]
    fn empty_results() {
        let stats = PlayerStats::from_results(&[]);
        assert_eq!(stats, PlayerStats::default());
        assert!(stats.win_percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn streaks_and_distribution() {
        let results = [
            result(1, true, 3, 30),
            result(2, true, 4, 50),
            result(3, false, 6, 100),
            result(4, true, 2, 20),
        ];
        let stats = PlayerStats::from_results(&results);

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert!((stats.win_percentage - 75.0).abs() < 1e-9);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, [0, 1, 1, 1, 0, 0]);
        assert!((stats.average_time_seconds - 50.0).abs() < 1e-9);
        assert_eq!(stats.max_bucket(), 1);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut results = vec![
            result(1, true, 1, 5),
            result(2, false, 6, 5),
            result(3, true, 5, 5),
            result(4, true, 5, 5),
        ];
        let forward = PlayerStats::from_results(&results);
        results.reverse();
        assert_eq!(PlayerStats::from_results(&results), forward);
        assert_eq!(forward.current_streak, 2);
        assert_eq!(forward.guess_distribution[4], 2);
    }

    #[test]
    fn out_of_range_guess_counts_not_charted() {
        let stats = PlayerStats::from_results(&[result(1, true, 0, 1), result(2, true, 9, 1)]);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.max_bucket(), 0);
    }
}
