//! Append-only JSON-lines stores
//!
//! Each record is one JSON object per line. Files are opened in append mode
//! and existing lines are never rewritten. Ids and uniqueness are checked
//! against the file itself on every write, so several handles on one path
//! see each other's records.

use super::{ResultStore, StoreError, UserStore, check_unique};
use crate::auth::{NewUser, User, UserId};
use crate::game::{GameResult, NewResult};
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// An open JSON-lines file
#[derive(Debug)]
struct JsonlFile {
    file: File,
}

impl JsonlFile {
    fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut opened = Self { file };
        opened.repair_tail(path)?;
        Ok(opened)
    }

    /// Make the file end on a line boundary
    ///
    /// A last line without its newline is either a complete record (kept,
    /// newline added) or a torn write (dropped). Otherwise the next append
    /// would be glued onto it.
    fn repair_tail(&mut self, path: &Path) -> Result<(), StoreError> {
        let bytes = fs::read(path)?;
        if bytes.last().is_none_or(|&b| b == b'\n') {
            return Ok(());
        }

        let start = bytes.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
        let tail = &bytes[start..];

        if serde_json::from_slice::<serde_json::Value>(tail).is_ok() {
            debug!(path = %path.display(), "terminating last record");
            self.file.write_all(b"\n")?;
            self.file.flush()?;
        } else {
            warn!(
                path = %path.display(),
                bytes = tail.len(),
                "discarding torn record at end of file"
            );
            self.file.set_len(start as u64)?;
        }
        Ok(())
    }

    /// Write one record; a failed write leaves the file as it was
    fn append<T: Serialize>(&mut self, record: &T) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let len = self.file.metadata()?.len();
        let written = self
            .file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.flush());

        if let Err(e) = written {
            if let Err(truncate) = self.file.set_len(len) {
                warn!("failed to drop partial record: {truncate}");
            }
            return Err(e.into());
        }
        Ok(())
    }
}

/// Read every record in a JSON-lines file; a missing file holds no records
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    fs::read_to_string(path)?
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| StoreError::Corrupt {
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// Game results persisted to a JSON-lines file
#[derive(Debug)]
pub struct JsonlResultStore {
    path: PathBuf,
    file: Mutex<JsonlFile>,
}

impl JsonlResultStore {
    /// Open (or create) the results file
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be created or an existing line
    /// is not a valid result.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let file = JsonlFile::open(&path)?;
        let existing: Vec<GameResult> = read_records(&path)?;
        debug!(path = %path.display(), records = existing.len(), "opened result log");

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }
}

impl ResultStore for JsonlResultStore {
    fn append(&self, result: NewResult) -> Result<GameResult, StoreError> {
        let mut file = self.file.lock();
        let existing: Vec<GameResult> = read_records(&self.path)?;
        let next_id = existing.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        let stored = result.with_id(next_id);
        file.append(&stored)?;
        Ok(stored)
    }

    fn list(&self, owner: Option<UserId>) -> Result<Vec<GameResult>, StoreError> {
        // Hold the lock so a concurrent append is never read half-written
        let _file = self.file.lock();
        let mut results: Vec<GameResult> = read_records(&self.path)?;
        results.retain(|r| r.owner == owner);
        Ok(results)
    }
}

/// Accounts persisted to a JSON-lines file
#[derive(Debug)]
pub struct JsonlUserStore {
    path: PathBuf,
    file: Mutex<JsonlFile>,
}

impl JsonlUserStore {
    /// Open (or create) the users file
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be created or an existing line
    /// is not a valid user.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let file = JsonlFile::open(&path)?;
        let users: Vec<User> = read_records(&path)?;
        debug!(path = %path.display(), users = users.len(), "opened user log");

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    fn find(&self, predicate: impl Fn(&User) -> bool) -> Result<Option<User>, StoreError> {
        let _file = self.file.lock();
        let users: Vec<User> = read_records(&self.path)?;
        Ok(users.into_iter().find(predicate))
    }
}

impl UserStore for JsonlUserStore {
    fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut file = self.file.lock();
        let users: Vec<User> = read_records(&self.path)?;
        check_unique(&users, &user)?;

        let next_id = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        let stored = user.with_id(UserId(next_id));
        file.append(&stored)?;
        Ok(stored)
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.find(|u| u.username.eq_ignore_ascii_case(username))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.find(|u| u.email.eq_ignore_ascii_case(email))
    }
}
