use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use menu_core::error::CoreError;
use menu_core::types::Timestamp;
use serde::Serialize;
use validator::ValidationErrors;

use crate::extract::flatten_validation_errors;

/// Application-level error type for HTTP handlers and the menu service.
///
/// Wraps [`CoreError`] for domain errors and adds persistence and
/// HTTP-specific variants. Implements [`IntoResponse`] to produce the
/// structured JSON error body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `menu_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure, tagged with the operation that was attempted.
    #[error("{context}: {source}")]
    Persistence {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The request could not be parsed or failed field validation.
    #[error("Malformed request: {message}")]
    MalformedRequest {
        message: String,
        details: Vec<String>,
    },

    /// Anything not classified above.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter that wraps a storage error with `context`.
    pub fn persistence(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Persistence { context, source }
    }

    pub fn malformed(message: impl Into<String>, details: Vec<String>) -> Self {
        AppError::MalformedRequest {
            message: message.into(),
            details,
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: &'static str,
    pub timestamp: Timestamp,
    pub details: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error_type, message, details) = match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "RESOURCE_NOT_FOUND",
                "NOT_FOUND",
                "Requested resource was not found".to_string(),
                vec![format!("{entity} with id {id} not found")],
            ),
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_REQUEST",
                "VALIDATION",
                "Request failed validation".to_string(),
                vec![msg],
            ),

            // --- Storage errors ---
            AppError::Persistence { context, source } => {
                tracing::error!(error = %source, context, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "PERSISTENCE",
                    "A database error occurred".to_string(),
                    vec![context.to_string()],
                )
            }

            // --- HTTP-specific errors ---
            AppError::MalformedRequest { message, details } => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_REQUEST",
                "VALIDATION",
                message,
                details,
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "UNEXPECTED",
                    "An internal error occurred".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            code,
            message,
            error_type,
            timestamp: Utc::now(),
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Extractor rejections
// ---------------------------------------------------------------------------

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::malformed("Malformed request body", vec![rejection.body_text()])
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::malformed("Invalid query parameters", vec![rejection.body_text()])
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::malformed("Invalid path parameter", vec![rejection.body_text()])
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::malformed(
            "Request failed validation",
            flatten_validation_errors(&errors),
        )
    }
}
