//! Error types for the structure timer server.
//!
//! Domain errors (authentication, configuration, timers) get their own enums with
//! dedicated HTTP mappings. Library errors are wrapped by [`Error`] and reported as a
//! logged 500 through [`InternalServerError`].

pub mod auth;
pub mod config;
pub mod timer;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, timer::TimerError},
};

/// Main error type of the server.
///
/// Aggregates the domain error enums and external library errors so handlers, services
/// and startup code can all use `?`. The `IntoResponse` implementation maps each error to
/// an HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error (session, permissions, CSRF).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Timer lookup or form validation error.
    #[error(transparent)]
    TimerError(#[from] TimerError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Template rendering error.
    #[error(transparent)]
    TemplateError(#[from] askama::Error),
    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - CSRF mismatch or invalid form
/// - 401 Unauthorized - No user in session, or the session user no longer exists
/// - 403 Forbidden - Missing permission
/// - 404 Not Found - Unknown timer, timer not visible to the user, unknown list tab
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::TimerError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details are not leaked
/// to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
