use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::form::FormErrors};

#[derive(Error, Debug)]
pub enum TimerError {
    /// The timer does not exist or is hidden from the requesting user
    #[error("Timer ID {0:?} not found or not visible to the user")]
    TimerNotFound(i32),
    #[error("Unknown timer list tab {0:?}")]
    UnknownTab(String),
    #[error("Timer form is invalid: {0}")]
    InvalidForm(FormErrors),
}

impl IntoResponse for TimerError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::TimerNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Timer not found".to_string(),
                }),
            )
                .into_response(),
            Self::UnknownTab(tab_name) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("Unknown tab: {}", tab_name),
                }),
            )
                .into_response(),
            Self::InvalidForm(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: errors.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
