//! Maintenance event model.

use assetdesk_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `maintenance_records` table. Owned by its asset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceRecord {
    pub id: DbId,
    pub assetid: String,
    pub issue: Option<String>,
    pub maintenance_date: Option<Date>,
    pub vendor: Option<String>,
    pub cost: Option<f64>,
    pub status: Option<String>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for logging a maintenance event against an asset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMaintenanceRecord {
    pub assetid: String,
    pub issue: Option<String>,
    pub maintenance_date: Option<Date>,
    pub vendor: Option<String>,
    pub cost: Option<f64>,
    pub status: Option<String>,
    pub remarks: Option<String>,
}
