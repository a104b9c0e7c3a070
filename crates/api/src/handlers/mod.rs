//! Request handlers.
//!
//! State-changing handlers delegate to [`AssetLifecycle`](crate::lifecycle::AssetLifecycle);
//! read-only handlers go straight to the repositories in `assetdesk_db`.
//! Errors are mapped via [`AppError`](crate::error::AppError).

pub mod assets;
pub mod dashboard;
pub mod disposal;
pub mod personnel;
pub mod records;
pub mod software;
