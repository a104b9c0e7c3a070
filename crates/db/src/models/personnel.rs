//! Personnel model. Read-only from the API's point of view.

use assetdesk_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `personnel` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Personnel {
    pub userid: String,
    pub username: String,
    pub email: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub location: Option<String>,
    pub created_at: Timestamp,
}
