//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lego_core::model::{ProfileError, UserError};
use serde_json::json;
use services::{ExerciseServiceError, ProgressServiceError, UserServiceError};
use thiserror::Error;
use tracing::error;

/// Errors returned by handlers, rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    InvalidProfile(#[from] ProfileError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidProfile(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<UserServiceError> for ApiError {
    fn from(e: UserServiceError) -> Self {
        let message = e.to_string();
        match e {
            UserServiceError::Invalid(inner) => inner.into(),
            UserServiceError::NotFound => ApiError::NotFound(message),
            _ => ApiError::Internal(message),
        }
    }
}

impl From<ProgressServiceError> for ApiError {
    fn from(e: ProgressServiceError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ExerciseServiceError> for ApiError {
    fn from(e: ExerciseServiceError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Internal(cause) => {
                error!(%cause, "request failed");
                "Internal Server Error".to_owned()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
