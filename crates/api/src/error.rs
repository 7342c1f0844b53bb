use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mias_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mias_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure surfaced with an operation-specific user message.
    ///
    /// The underlying error is logged, never sent to the client.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The request body was not a JSON document of the expected shape.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// The external image service failed or returned nothing.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a store failure with the message shown to the client.
    pub fn store(message: &'static str, source: sqlx::Error) -> Self {
        Self::Store { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    (*message).to_string(),
                )
            }

            // --- Request body errors ---
            AppError::InvalidBody(rejection) => classify_json_rejection(rejection),

            // --- External service errors ---
            AppError::ExternalService(msg) => {
                (StatusCode::BAD_GATEWAY, "EXTERNAL_SERVICE_ERROR", msg.clone())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a JSON extractor rejection into an HTTP status, error code, and
/// message.
///
/// - A body over the configured limit keeps its 413.
/// - Wrong content type, malformed JSON and mistyped fields map to 400.
fn classify_json_rejection(rejection: &JsonRejection) -> (StatusCode, &'static str, String) {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            "PAYLOAD_TOO_LARGE",
            rejection.body_text(),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            rejection.body_text(),
        )
    }
}
