//! Wordle backend
//!
//! Game core for a daily word-guessing game: feedback scoring, word
//! selection, a per-session state machine and result recording, with
//! in-memory and JSON-lines stores.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_backend::core::{Word, score};
//!
//! let target = Word::new("abide").unwrap();
//! let guess = Word::new("speed").unwrap();
//!
//! // Prints ⬜⬜🟨⬜🟨
//! let feedback = score(&target, &guess);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Sessions, selection and results
pub mod game;

// Persistence
pub mod store;

// Accounts and request identity
pub mod auth;

// Player statistics
pub mod stats;

// Error types
pub mod error;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
