//! Shared response envelope types for API handlers.
//!
//! Rows and lists are returned bare. Operations whose primary result is a
//! confirmation (retire, purge) use [`MessageResponse`] so clients get a
//! human-readable message alongside the affected row.

use serde::Serialize;

/// `{ "message": ..., "data": T }` confirmation envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(MessageResponse::new("Asset retired", asset)))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
