//! Request extractors whose rejections use the API's error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` that rejects unreadable bodies with a 400
/// `{"error", "code": "BAD_REQUEST"}` instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
