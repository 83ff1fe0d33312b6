use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{models::ErrorBody, storage::StorageError, validation::FieldErrors, visit::VisitError};

/// ApiError
///
/// Everything a handler can fail with. Validation failures carry the per-field
/// messages so the client can render them inline.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("{0}")]
    Conflict(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<VisitError> for ApiError {
    fn from(error: VisitError) -> Self {
        match error {
            VisitError::MissingLocation(errors) => ApiError::Validation(errors),
            other => ApiError::Conflict(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "Validation Error".to_string(),
                    message: "Please fix the errors below and try again.".to_string(),
                    fields: Some(fields),
                },
            ),
            ApiError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: "Conflict".to_string(),
                    message,
                    fields: None,
                },
            ),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Not Found".to_string(),
                    message: format!("{what} not found"),
                    fields: None,
                },
            ),
            ApiError::Storage(e) => {
                tracing::error!(error = %e, "session storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal Server Error".to_string(),
                        message: "Session storage is unavailable.".to_string(),
                        fields: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
