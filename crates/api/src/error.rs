//! HTTP error mapping.
//!
//! Every failure leaves a handler as `{"error": <message>, "code": <CODE>}`.
//! Store and internal failures are logged in full and reported to the
//! client with a fixed message.

use assetdesk_core::error::CoreError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error type returned by handlers and the lifecycle manager.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain failure: missing record, bad input, duplicate key.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure reported by the store.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be read as the expected JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A multi-statement operation did not take effect and was rolled back.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("NOT_FOUND", format!("{entity} with id {id} not found")),
            ),
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("VALIDATION_ERROR", msg.clone()),
            ),
            // Existing clients expect a duplicate id to be a plain 400.
            AppError::Core(CoreError::Conflict(msg)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("CONFLICT", msg.clone()),
            ),
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Operation failed");
                internal()
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("BAD_REQUEST", msg.clone()),
            ),
            AppError::Database(err) => classify_store_error(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl ErrorBody {
    fn new(code: &'static str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

fn internal() -> (StatusCode, ErrorBody) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody::new("INTERNAL_ERROR", INTERNAL_MESSAGE),
    )
}

/// Whether a store error is a primary-key or unique-index collision.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

/// Map a store error that escaped the lifecycle manager.
///
/// Collisions are still reported as `CONFLICT` so a duplicate key that slips
/// past every pre-check never surfaces as a 500.
fn classify_store_error(err: &sqlx::Error) -> (StatusCode, ErrorBody) {
    if is_unique_violation(err) {
        let key = match err {
            sqlx::Error::Database(db_err) => db_err.constraint().unwrap_or("primary key"),
            _ => "primary key",
        };
        return (
            StatusCode::BAD_REQUEST,
            ErrorBody::new("CONFLICT", format!("Record already exists ({key})")),
        );
    }

    tracing::error!(error = %err, "Database error");
    internal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> (StatusCode, &'static str) {
        let (status, body) = err.status_and_body();
        (status, body.code)
    }

    #[test]
    fn domain_errors_map_to_client_statuses() {
        assert_eq!(
            status_of(CoreError::not_found("Asset", "A1").into()),
            (StatusCode::NOT_FOUND, "NOT_FOUND")
        );
        assert_eq!(
            status_of(CoreError::Validation("Asset ID is required".into()).into()),
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        );
        assert_eq!(
            status_of(CoreError::Conflict("Asset ID already exists".into()).into()),
            (StatusCode::BAD_REQUEST, "CONFLICT")
        );
    }

    #[test]
    fn bad_request_keeps_its_message() {
        let (status, body) = AppError::BadRequest("expected value".into()).status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "BAD_REQUEST");
        assert_eq!(body.error, "expected value");
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let (status, body) =
            AppError::InternalError("Failed to delete asset: A1".into()).status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_MESSAGE);

        let (status, body) = AppError::Database(sqlx::Error::PoolTimedOut).status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "INTERNAL_ERROR");
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }
}
