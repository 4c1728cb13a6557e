//! Command implementations

pub mod account;
pub mod daily;
pub mod play;
pub mod score;

pub use account::{register_user, resolve_owner, submit_result_json};
pub use daily::{DailyInfo, daily_info};
pub use play::{PlaySummary, run_play};
pub use score::{ScoreResult, score_words};
