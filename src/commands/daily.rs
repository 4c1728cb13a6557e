//! Daily word command
//!
//! Reports where the daily pick lands in the word list. The word itself is
//! never printed.

use crate::game::{WordPicker, daily_index, day_ordinal};
use chrono::NaiveDate;

/// Position of a date's daily word
pub struct DailyInfo {
    pub date: NaiveDate,
    pub ordinal: u64,
    pub index: usize,
    pub list_len: usize,
}

#[must_use]
pub fn daily_info(picker: &WordPicker, date: NaiveDate) -> DailyInfo {
    let list_len = picker.words().len();
    DailyInfo {
        date,
        ordinal: day_ordinal(date),
        index: daily_index(date, list_len),
        list_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::SelectionPolicy;
    use crate::wordlists::WordList;
    use std::sync::Arc;

    #[test]
    fn index_matches_picker() {
        let words = WordList::new(
            ["abide", "about", "crane", "slate", "speed"]
                .into_iter()
                .map(|w| Word::new(w).unwrap()),
        )
        .unwrap();
        let picker = WordPicker::new(Arc::new(words), SelectionPolicy::Daily);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let info = daily_info(&picker, date);
        assert_eq!(info.ordinal, 738_886);
        assert_eq!(info.index, 1);
        assert_eq!(info.list_len, 5);
        assert_eq!(picker.words().get(info.index), Some(picker.daily_for_date(date)));
    }
}
