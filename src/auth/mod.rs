//! Accounts and request identity
//!
//! Registration stores a salted password hash; login hands out an opaque
//! bearer token that [`IdentityProvider::resolve`] maps back to a user.
//! Requests without a token are guests.

mod password;

pub use password::{hash_password, verify_password};

use crate::error::{GameError, Result};
use crate::store::{StoreError, UserStore};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, info, warn};

/// Store-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// An account waiting for the store to assign an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}

/// Opaque bearer token
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes);
        Self(hex::encode(bytes))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the secret itself
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Successful registration or login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user_id: UserId,
    pub username: String,
    pub token: AuthToken,
}

/// Maps a request's credentials to an optional owner
pub trait IdentityProvider: Send + Sync {
    /// `None` token means guest
    ///
    /// # Errors
    ///
    /// Returns `GameError::Unauthorized` if a token is given but not recognised.
    fn resolve(&self, token: Option<&str>) -> Result<Option<UserId>>;
}

/// Registration, login and token bookkeeping over a `UserStore`
pub struct Authenticator<U: UserStore> {
    users: U,
    tokens: RwLock<FxHashMap<String, UserId>>,
}

impl<U: UserStore> Authenticator<U> {
    pub fn new(users: U) -> Self {
        Self {
            users,
            tokens: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create an account and log it in
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidInput` for a missing field or malformed email
    /// - `GameError::Conflict` if the username or email is taken
    /// - `GameError::Persistence` if the account could not be stored
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthSession> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(GameError::InvalidInput("missing fields".to_string()));
        }
        if !email.contains('@') {
            return Err(GameError::InvalidInput(format!(
                "malformed email address: {email}"
            )));
        }

        let password_hash = hash_password(password).map_err(|e| {
            error!(username, "failed to hash password: {e}");
            GameError::InvalidInput(format!("password could not be hashed: {e}"))
        })?;

        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: now,
        };

        let user = self.users.insert(new_user).map_err(|e| match e {
            StoreError::Duplicate { field } => GameError::Conflict(format!("{field} taken")),
            other => {
                error!(username, "failed to store new user: {other}");
                GameError::persistence("registering user", other)
            }
        })?;

        info!(user_id = %user.id, username = %user.username, "registered user");
        Ok(self.issue(user))
    }

    /// Verify credentials (username or email) and issue a fresh token
    ///
    /// # Errors
    ///
    /// Returns `GameError::Unauthorized` for an unknown user or wrong password,
    /// and `GameError::Persistence` if the user store cannot be read.
    pub fn login(&self, username: &str, password: &str) -> Result<AuthSession> {
        let username = username.trim();
        // Accounts can sign in with their email address too
        let lookup = if username.contains('@') {
            self.users.find_by_email(username)
        } else {
            self.users.find_by_username(username)
        };
        let user = lookup.map_err(|e| GameError::persistence("looking up user", e))?;

        match user {
            Some(user) if verify_password(password, &user.password_hash) => {
                info!(user_id = %user.id, "user logged in");
                Ok(self.issue(user))
            }
            _ => {
                warn!(username, "rejected login");
                Err(GameError::Unauthorized)
            }
        }
    }

    /// Revoke a token; returns whether it was live
    pub fn logout(&self, token: &str) -> bool {
        self.tokens.write().remove(token).is_some()
    }

    fn issue(&self, user: User) -> AuthSession {
        let token = AuthToken::generate();
        self.tokens.write().insert(token.0.clone(), user.id);
        AuthSession {
            user_id: user.id,
            username: user.username,
            token,
        }
    }
}

impl<U: UserStore> IdentityProvider for Authenticator<U> {
    fn resolve(&self, token: Option<&str>) -> Result<Option<UserId>> {
        let Some(token) = token else {
            return Ok(None);
        };
        self.tokens
            .read()
            .get(token)
            .copied()
            .map(Some)
            .ok_or(GameError::Unauthorized)
    }
}
