//! Account commands
//!
//! Registration, credential resolution and client-reported results.

use crate::auth::{AuthSession, Authenticator, IdentityProvider, UserId};
use crate::error::{GameError, Result};
use crate::game::{Ack, GameService, ResultSubmission};
use crate::store::{ResultStore, SessionStore, UserStore};
use chrono::Utc;

/// Register an account and return its first login
///
/// # Errors
///
/// See [`Authenticator::register`].
pub fn register_user<U: UserStore>(
    auth: &Authenticator<U>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<AuthSession> {
    auth.register(username, email, password, Utc::now())
}

/// Turn optional CLI credentials into a request owner
///
/// No credentials means guest. The login token is resolved back through
/// the identity provider, the same path a bearer token takes.
///
/// # Errors
///
/// - `GameError::InvalidInput` if only one of username and password is given
/// - `GameError::Unauthorized` for bad credentials
pub fn resolve_owner<U: UserStore>(
    auth: &Authenticator<U>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Option<UserId>> {
    match (username, password) {
        (None, None) => auth.resolve(None),
        (Some(username), Some(password)) => {
            let session = auth.login(username, password)?;
            auth.resolve(Some(session.token.as_str()))
        }
        _ => Err(GameError::InvalidInput(
            "username and password must be given together".to_string(),
        )),
    }
}

/// Record a result reported as a JSON payload
///
/// # Errors
///
/// Returns `GameError::InvalidInput` for a malformed payload, otherwise see
/// [`GameService::submit_result`].
pub fn submit_result_json<S: SessionStore, R: ResultStore>(
    service: &GameService<S, R>,
    owner: Option<UserId>,
    payload: &str,
) -> Result<Ack> {
    let submission = ResultSubmission::from_json(payload)?;
    service.submit_result(owner, submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{SelectionPolicy, WordPicker};
    use crate::store::{MemoryResultStore, MemorySessionStore, MemoryUserStore};
    use crate::wordlists::WordList;
    use std::sync::Arc;

    fn auth() -> Authenticator<MemoryUserStore> {
        Authenticator::new(MemoryUserStore::new())
    }

    #[test]
    fn guest_without_credentials() {
        assert_eq!(resolve_owner(&auth(), None, None).unwrap(), None);
    }

    #[test]
    fn credentials_resolve_to_user() {
        let auth = auth();
        let registered = register_user(&auth, "alice", "alice@example.com", "pw").unwrap();

        let owner = resolve_owner(&auth, Some("alice"), Some("pw")).unwrap();
        assert_eq!(owner, Some(registered.user_id));

        assert!(matches!(
            resolve_owner(&auth, Some("alice"), Some("nope")),
            Err(GameError::Unauthorized)
        ));
        assert!(matches!(
            resolve_owner(&auth, Some("alice"), None),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn json_results_recorded_for_owner() {
        let words = WordList::new([Word::new("abide").unwrap()]).unwrap();
        let service = GameService::new(
            WordPicker::new(Arc::new(words), SelectionPolicy::Daily),
            MemorySessionStore::new(),
            MemoryResultStore::new(),
        );
        let owner = Some(UserId(7));

        let ack = submit_result_json(
            &service,
            owner,
            r#"{"wordId": "ABIDE", "guesses": 4, "won": true, "timeTaken": 95}"#,
        )
        .unwrap();
        assert_eq!(ack.message, "Game result saved");
        assert_eq!(service.stats(owner).unwrap().guess_distribution[3], 1);

        assert!(matches!(
            submit_result_json(&service, owner, "{not json"),
            Err(GameError::InvalidInput(_))
        ));
        assert!(matches!(
            submit_result_json(
                &service,
                owner,
                r#"{"word": "abide", "guessCount": -1, "won": false, "timeTaken": 5}"#
            ),
            Err(GameError::InvalidInput(_))
        ));
    }
}
