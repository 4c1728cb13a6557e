//! Wordle - CLI
//!
//! Play, score guesses, manage accounts and inspect results from the terminal.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use wordle_backend::{
    auth::{Authenticator, UserId},
    commands::{
        daily_info, register_user, resolve_owner, run_play, score_words, submit_result_json,
    },
    config::Config,
    error::GameError,
    game::{GameService, WordPicker},
    logging,
    output::{
        print_ack, print_auth_session, print_daily_info, print_player_stats, print_score_result,
    },
    store::{JsonlResultStore, JsonlUserStore, MemorySessionStore},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Daily word-guessing game with persistent results",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: Config,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Score a guess against a target word
    Score {
        /// The target word
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Show where the daily word falls in the list (never the word itself)
    Daily {
        /// Date as YYYY-MM-DD (default: today, UTC)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Create an account
    Register {
        username: String,

        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Show player statistics (guest statistics without credentials)
    Stats {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Record a client-reported result, e.g. '{"word":"abide","guessCount":3,"won":true,"timeTaken":40}'
    SubmitResult {
        /// JSON payload
        payload: String,

        #[command(flatten)]
        credentials: Credentials,
    },
}

/// Optional sign-in; omit both to act as a guest
#[derive(clap::Args, Default)]
struct Credentials {
    #[arg(short, long)]
    username: Option<String>,

    #[arg(short, long)]
    password: Option<String>,
}

type Service = GameService<MemorySessionStore, JsonlResultStore>;
type Accounts = Authenticator<JsonlUserStore>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.config.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = error_code(&err);
            tracing::error!(code, "command failed: {err:#}");
            eprintln!("{} {err:#}", format!("error[{code}]:").red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Machine-readable code of the first game error in the chain
fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<GameError>())
        .map_or("internal", GameError::code)
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Play {
        credentials: Credentials::default(),
    });

    match command {
        Commands::Play { credentials } => run_play_command(&cli.config, &credentials),
        Commands::Score { target, guess } => {
            let result = score_words(&target, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Daily { date } => run_daily_command(&cli.config, date),
        Commands::Register {
            username,
            email,
            password,
        } => {
            let accounts = open_accounts(&cli.config)?;
            let session = register_user(&accounts, &username, &email, &password)
                .context("registration failed")?;
            print_auth_session(&session);
            Ok(())
        }
        Commands::Stats { credentials } => run_stats_command(&cli.config, &credentials),
        Commands::SubmitResult {
            payload,
            credentials,
        } => {
            let owner = sign_in(&cli.config, &credentials)?;
            let service = open_service(&cli.config)?;
            let ack = submit_result_json(&service, owner, &payload)
                .context("result was not recorded")?;
            print_ack(&ack);
            Ok(())
        }
    }
}

fn run_play_command(config: &Config, credentials: &Credentials) -> Result<()> {
    let owner = sign_in(config, credentials)?;
    let service = open_service(config)?;

    let mut input = io::stdin().lock();
    let summary = run_play(&service, owner, &mut input)?;
    if summary.games > 0 {
        println!("Won {} of {} games this run", summary.wins, summary.games);
    }
    Ok(())
}

fn run_daily_command(config: &Config, date: Option<NaiveDate>) -> Result<()> {
    let words = config.word_list().context("failed to load word list")?;
    let picker = WordPicker::new(Arc::new(words), config.policy);
    let info = daily_info(&picker, date.unwrap_or_else(|| Utc::now().date_naive()));
    print_daily_info(&info);
    Ok(())
}

fn run_stats_command(config: &Config, credentials: &Credentials) -> Result<()> {
    let owner = sign_in(config, credentials)?;
    let service = open_service(config)?;
    let stats = service.stats(owner)?;

    let who = credentials.username.as_deref().unwrap_or("guest");
    print_player_stats(&stats, who);
    Ok(())
}

fn open_service(config: &Config) -> Result<Service> {
    let words = config.word_list().context("failed to load word list")?;
    let results = JsonlResultStore::open(config.results_path()).with_context(|| {
        format!(
            "failed to open results file {}",
            config.results_path().display()
        )
    })?;

    let picker = WordPicker::new(Arc::new(words), config.policy);
    Ok(GameService::new(picker, MemorySessionStore::new(), results))
}

fn open_accounts(config: &Config) -> Result<Accounts> {
    let users = JsonlUserStore::open(config.users_path()).with_context(|| {
        format!(
            "failed to open users file {}",
            config.users_path().display()
        )
    })?;
    Ok(Authenticator::new(users))
}

/// Resolve optional credentials; guests never touch the users file
fn sign_in(config: &Config, credentials: &Credentials) -> Result<Option<UserId>> {
    if credentials.username.is_none() && credentials.password.is_none() {
        return Ok(None);
    }
    let accounts = open_accounts(config)?;
    resolve_owner(
        &accounts,
        credentials.username.as_deref(),
        credentials.password.as_deref(),
    )
    .context("sign-in failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn error_code_found_through_context() {
        let err = Err::<(), _>(GameError::Unauthorized)
            .context("sign-in failed")
            .unwrap_err();
        assert_eq!(error_code(&err), "unauthorized");
    }

    #[test]
    fn error_code_for_other_failures() {
        assert_eq!(error_code(&anyhow!("stdin closed")), "internal");
    }
}
