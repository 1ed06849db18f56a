//! # Web API Error Types
//!
//! HTTP-facing error types and their response conversions. Engine failures
//! map onto these via `From<TodoError>`; the response body is always
//! `{"error": {"code", "message"}}`, with per-field `details` attached for
//! validation failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::error::{FieldError, TodoError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("task {0} not found")]
    NotFound(Uuid),

    #[error("a task titled '{0}' already exists")]
    Conflict(String),

    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("internal server error")]
    Internal,
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::TaskNotFound(id) => ApiError::NotFound(id),
            TodoError::DuplicateTask(title) => ApiError::Conflict(title),
            TodoError::Validation(errors) => ApiError::Validation(errors),
            TodoError::Storage(message) => {
                error!(error = %message, "store failure surfaced to web layer");
                ApiError::Internal
            }
            TodoError::Configuration(message) => {
                error!(error = %message, "configuration failure surfaced to web layer");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "TASK_NOT_FOUND",
                format!("Task with id {id} was not found"),
            ),

            ApiError::Conflict(title) => (
                StatusCode::CONFLICT,
                "DUPLICATE_TASK",
                format!("A task titled '{title}' already exists"),
            ),

            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),

            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
        };

        let mut error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        if let ApiError::Validation(errors) = &self {
            error_response["error"]["details"] =
                serde_json::to_value(errors).unwrap_or_default();
        }

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for web API operations
pub type ApiResult<T> = Result<T, ApiError>;
