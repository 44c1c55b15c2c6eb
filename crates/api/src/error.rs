use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moodboard_core::error::CoreError;
use moodboard_storage::StorageError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Reads surface store failures directly; writes wrap them in
/// [`AppError::UpdateFailed`] so the operator sees which action failed and
/// can retry it. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `moodboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An image store error.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A request body that is not valid JSON for the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// A database error during a read.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database error during a write.
    #[error("Failed to {action}: {source}")]
    UpdateFailed {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map a write-side database error, naming the action for the operator.
    pub fn update_failed(action: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::UpdateFailed { action, source }
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

            // --- Image store errors ---
            AppError::Storage(err) => match err {
                StorageError::NotFound { key } => (
                    StatusCode::NOT_FOUND,
                    "IMAGE_NOT_FOUND",
                    format!("Image not found: {key}"),
                ),
                StorageError::Unavailable(msg) => {
                    tracing::error!(error = %msg, "Image store unavailable");
                    unavailable()
                }
                StorageError::InvalidConfig(msg) => {
                    tracing::error!(error = %msg, "Image store misconfigured");
                    internal()
                }
            },

            AppError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                rejection.body_text(),
            ),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::UpdateFailed { action, source } => {
                tracing::error!(action, error = %source, "Write failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPDATE_FAILED",
                    format!("Failed to {action}: {}", write_failure_cause(source)),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn unavailable() -> (StatusCode, &'static str, String) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "STORE_UNAVAILABLE",
        "A backing store is unavailable, please retry".to_string(),
    )
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Operator-facing category of a write failure. Never includes driver text,
/// which can carry hostnames or SQL.
fn write_failure_cause(err: &sqlx::Error) -> &'static str {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => "database unreachable",
        sqlx::Error::Database(db) if db.is_unique_violation() => "duplicate serial number",
        sqlx::Error::Database(db) if db.is_check_violation() => "value not allowed",
        sqlx::Error::ColumnDecode { .. } => "stored value could not be read",
        _ => "database error",
    }
}

/// Classify a read-side sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Connection failures (pool timeout/closed, I/O, TLS) map to 503.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => {
            tracing::error!(error = %err, "Database unreachable");
            unavailable()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
