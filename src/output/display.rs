//! Display functions for command results

use super::formatters::{create_progress_bar, guesses_label, tile_row};
use crate::auth::AuthSession;
use crate::commands::{DailyInfo, ScoreResult};
use crate::core::Word;
use crate::game::{Ack, GuessRecord, GuessResponse, StartSessionResponse};
use crate::stats::PlayerStats;
use colored::Colorize;

/// Print the rules line at the start of a game
pub fn print_play_header(started: &StartSessionResponse) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Guess the {}-letter word in {} tries",
        started.word_length.to_string().bright_yellow().bold(),
        started.max_attempts.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print one scored guess
pub fn print_guess_response(guess: &Word, response: &GuessResponse) {
    println!(
        "  {}  {}",
        tile_row(guess, &response.feedback),
        format!("{} left", response.attempts_remaining).bright_black()
    );
}

/// Print the end-of-game banner
pub fn print_game_over(response: &GuessResponse, history: &[GuessRecord]) {
    println!("\n{}", "═".repeat(60).bright_cyan());

    if response.won == Some(true) {
        println!(
            "{}",
            "         🎉 🎊 ✨  Y O U   W I N !  ✨ 🎊 🎉         "
                .bright_green()
                .bold()
        );

        let performance = match history.len() {
            1 => "🏆 Perfect!",
            2 => "⭐ Excellent!",
            3 => "💫 Great!",
            4 => "✨ Good!",
            _ => "👍 Solved!",
        };
        println!("\n  {}", performance.bright_yellow().bold());
        println!(
            "  Solved in {}",
            guesses_label(history.len()).bright_cyan().bold()
        );
    } else {
        println!("{}", "              Out of guesses              ".red().bold());
        if let Some(target) = &response.target {
            println!(
                "\n  The word was {}",
                target.text().to_uppercase().bright_yellow().bold()
            );
        }
    }

    println!("\n  Guess history:");
    for (i, record) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.guess.text().to_uppercase().bright_white().bold(),
            record.feedback.to_emoji()
        );
    }

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!();
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "  {}  {}",
        tile_row(&result.guess, &result.check.feedback),
        result.check.feedback.to_emoji()
    );

    if result.check.is_correct {
        println!("{}", "✅ Correct!".green().bold());
    } else {
        println!("{}", "❌ Not the word".red());
    }
}

/// Print where the daily word sits in the list
pub fn print_daily_info(info: &DailyInfo) {
    println!("\n📅 {}", info.date.to_string().bright_cyan().bold());
    println!("   Day ordinal:  {}", info.ordinal);
    println!(
        "   List index:   {} of {}",
        info.index.to_string().bright_yellow(),
        info.list_len
    );
}

/// Print player statistics
pub fn print_player_stats(stats: &PlayerStats, who: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STATISTICS:".bright_cyan().bold(),
        who.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win %:           {}",
        format!("{:.1}", stats.win_percentage).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);
    println!("   Average time:    {:.1}s", stats.average_time_seconds);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.max_bucket() as f64;
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max, 40);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}

/// Print a successful registration or login
pub fn print_auth_session(session: &AuthSession) {
    println!(
        "✅ Signed in as {} (id {})",
        session.username.bright_yellow().bold(),
        session.user_id
    );
}

pub fn print_ack(ack: &Ack) {
    println!("✅ {}", ack.message.green());
}
