use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {user_id:?} is missing permission {permission}")]
    MissingPermission {
        user_id: i32,
        permission: &'static str,
    },
    #[error("Form submission rejected due to CSRF token mismatch")]
    CsrfValidationFailed,
}

impl AuthError {
    fn not_logged_in() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "You need to log in to access structure timers".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::not_logged_in()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::not_logged_in()
            }
            Self::MissingPermission { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to do this".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Your form has expired, please reload the page and try again."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
