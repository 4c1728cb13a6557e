//! Terminal output formatting
//!
//! Colored tiles, banners and statistics for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_ack, print_auth_session, print_daily_info, print_game_over, print_guess_response,
    print_play_header, print_player_stats, print_score_result,
};
