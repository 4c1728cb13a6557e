//! Interactive play mode
//!
//! Text-based game loop over any line reader. Each game is a fresh
//! session; its result is recorded by the service when it ends.

use crate::auth::UserId;
use crate::core::Word;
use crate::error::GameError;
use crate::game::{GameService, GuessRecord, SessionId, StartSessionResponse};
use crate::output::{print_game_over, print_guess_response, print_play_header};
use crate::store::{ResultStore, SessionStore};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Games played during one run of play mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub games: usize,
    pub wins: usize,
}

enum GameEnd {
    Finished { won: bool },
    Quit,
}

/// Run the interactive game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if input cannot be read or a store operation fails.
pub fn run_play<S, R, I>(
    service: &GameService<S, R>,
    owner: Option<UserId>,
    input: &mut I,
) -> Result<PlaySummary>
where
    S: SessionStore,
    R: ResultStore,
    I: BufRead,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Commands: 'quit' to exit\n");

    let mut summary = PlaySummary::default();

    loop {
        let started = service
            .start_session(owner)
            .context("failed to start a session")?;
        print_play_header(&started);

        match play_one(service, owner, &started, input)? {
            GameEnd::Quit => break,
            GameEnd::Finished { won } => {
                summary.games += 1;
                summary.wins += usize::from(won);
            }
        }

        let again = get_user_input("Play again? (yes/no)", input)?;
        let again = again.map(|answer| answer.to_lowercase());
        if !matches!(again.as_deref(), Some("yes" | "y")) {
            break;
        }
        println!("\n🔄 New game started!\n");
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(summary)
}

fn play_one<S, R, I>(
    service: &GameService<S, R>,
    owner: Option<UserId>,
    started: &StartSessionResponse,
    input: &mut I,
) -> Result<GameEnd>
where
    S: SessionStore,
    R: ResultStore,
    I: BufRead,
{
    let session_id: SessionId = started.session_id;
    let mut history: Vec<GuessRecord> = Vec::with_capacity(started.max_attempts);

    loop {
        let prompt = format!("Guess {}/{}", history.len() + 1, started.max_attempts);
        let Some(line) = get_user_input(&prompt, input)? else {
            return Ok(GameEnd::Quit);
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(GameEnd::Quit);
        }

        let guess = match Word::new(line.as_str()) {
            Ok(guess) => guess,
            Err(e) => {
                println!("❌ {e}. Guesses are five letters, e.g. CRANE\n");
                continue;
            }
        };

        let response = match service.submit_guess(owner, session_id, guess.text()) {
            Ok(response) => response,
            Err(GameError::InvalidInput(reason)) => {
                println!("❌ {reason}\n");
                continue;
            }
            Err(e) => return Err(e).context("guess was not recorded"),
        };

        print_guess_response(&guess, &response);
        history.push(GuessRecord {
            guess,
            feedback: response.feedback,
        });

        if response.completed {
            print_game_over(&response, &history);
            return Ok(GameEnd::Finished {
                won: response.won == Some(true),
            });
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<I: BufRead>(prompt: &str, input: &mut I) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
