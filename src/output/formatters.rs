//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: u8, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// A scored guess as a row of tiles
#[must_use]
pub fn tile_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| tile(letter, status).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "1 guess" / "3 guesses"
#[must_use]
pub fn guesses_label(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn tile_row_shows_uppercase_letters() {
        let guess = Word::new("crane").unwrap();
        let feedback = score(&Word::new("slate").unwrap(), &guess);
        let row = tile_row(&guess, &feedback);

        for letter in [" C ", " R ", " A ", " N ", " E "] {
            assert!(row.contains(letter), "missing {letter} in {row:?}");
        }
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn guess_labels() {
        assert_eq!(guesses_label(1), "1 guess");
        assert_eq!(guesses_label(4), "4 guesses");
    }
}
