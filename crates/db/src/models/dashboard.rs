//! Dashboard summary counts.

use serde::Serialize;
use sqlx::FromRow;

/// Headline counts shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct DashboardCounts {
    pub asset_count: i64,
    pub disposal_count: i64,
    pub maintenance_count: i64,
    /// Assets with status `Assigned`.
    pub usage_count: i64,
    pub software_count: i64,
    /// Assets with status `Stock`.
    pub stock_count: i64,
    /// Software licenses flagged `expiredstatus = 'Yes'`.
    pub expiry_count: i64,
}
