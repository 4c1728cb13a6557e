//! Runtime configuration
//!
//! Global CLI flags, each with an environment variable fallback.

use crate::error::Result;
use crate::game::SelectionPolicy;
use crate::wordlists::WordList;
use clap::Args;
use std::path::{Path, PathBuf};

pub const RESULTS_FILE: &str = "results.jsonl";
pub const USERS_FILE: &str = "users.jsonl";

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Directory holding results.jsonl and users.jsonl
    #[arg(
        long,
        global = true,
        env = "WORDLE_DATA_DIR",
        default_value = "./wordle-data"
    )]
    pub data_dir: PathBuf,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDS")]
    pub words: Option<PathBuf>,

    /// How session targets are chosen
    #[arg(
        long,
        global = true,
        env = "WORDLE_POLICY",
        value_enum,
        default_value_t = SelectionPolicy::Daily
    )]
    pub policy: SelectionPolicy,

    /// Log filter, e.g. `info` or `wordle_backend=debug` (RUST_LOG wins)
    #[arg(long, global = true, env = "WORDLE_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    #[must_use]
    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join(RESULTS_FILE)
    }

    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    /// Load the configured word list
    ///
    /// # Errors
    ///
    /// Returns an error if the word file cannot be read or holds no valid words.
    pub fn word_list(&self) -> Result<WordList> {
        self.words
            .as_deref()
            .map_or_else(WordList::embedded, |path: &Path| WordList::from_file(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: Config,
    }

    fn parse(args: &[&str]) -> Config {
        Cli::try_parse_from(std::iter::once("wordle").chain(args.iter().copied()))
            .unwrap()
            .config
    }

    #[test]
    fn explicit_flags() {
        let config = parse(&[
            "--data-dir",
            "/tmp/wordle",
            "--policy",
            "random",
            "--log-level",
            "debug",
        ]);
        assert_eq!(config.policy, SelectionPolicy::Random);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.results_path(), Path::new("/tmp/wordle/results.jsonl"));
        assert_eq!(config.users_path(), Path::new("/tmp/wordle/users.jsonl"));
    }

    #[test]
    fn unknown_policy_rejected() {
        assert!(Cli::try_parse_from(["wordle", "--policy", "weekly"]).is_err());
    }

    #[test]
    fn custom_word_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "crane\nslate\n").unwrap();

        let config = parse(&["--words", path.to_str().unwrap()]);
        assert_eq!(config.word_list().unwrap().len(), 2);
    }
}
