use rand::{distr::Alphanumeric, Rng};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::csrf::SessionFormCsrf,
};

const CSRF_TOKEN_LENGTH: usize = 32;

/// Generate a token for a form about to be rendered and store it in the session.
pub async fn issue_csrf_token(session: &Session) -> Result<String, Error> {
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_TOKEN_LENGTH)
        .map(char::from)
        .collect();

    SessionFormCsrf::insert(session, &token).await?;

    Ok(token)
}

/// Validate that the session CSRF token exists and matches `token`.
/// The stored token is consumed either way.
pub async fn validate_csrf(session: &Session, token: &str) -> Result<(), Error> {
    let stored_token = SessionFormCsrf::remove(session).await?;

    if let Some(stored_token) = stored_token {
        if !token.is_empty() && stored_token == token {
            return Ok(());
        }
    }

    Err(Error::AuthError(AuthError::CsrfValidationFailed))
}
