//! Check-out / check-in movement model.

use assetdesk_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `in_out_records` table. Owned by its asset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InOutRecord {
    pub id: DbId,
    pub assetid: String,
    pub userid: Option<String>,
    pub checkout_date: Option<Date>,
    pub checkin_date: Option<Date>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for logging an asset movement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInOutRecord {
    pub assetid: String,
    pub userid: Option<String>,
    pub checkout_date: Option<Date>,
    pub checkin_date: Option<Date>,
    pub remarks: Option<String>,
}
