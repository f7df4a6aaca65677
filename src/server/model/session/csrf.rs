use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for the CSRF token of the last rendered timer form
pub const SESSION_FORM_CSRF_KEY: &str = "structuretimers:form:csrf";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionFormCsrf(pub String);

impl SessionFormCsrf {
    /// Store the CSRF token embedded in a rendered form, replacing any previous token.
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_FORM_CSRF_KEY, SessionFormCsrf(token.to_string()))
            .await?;

        Ok(())
    }

    /// Remove and return the stored token so each token validates a single submission.
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .remove::<SessionFormCsrf>(SESSION_FORM_CSRF_KEY)
            .await?
            .map(|SessionFormCsrf(token)| token);

        Ok(token)
    }
}
