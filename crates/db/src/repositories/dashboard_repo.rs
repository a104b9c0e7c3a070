//! Aggregate counts for the dashboard.

use assetdesk_core::lifecycle::{SOFTWARE_EXPIRED, STATUS_ASSIGNED, STATUS_STOCK};
use sqlx::PgPool;

use crate::models::dashboard::DashboardCounts;

/// Read-only summary queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute all headline counts in one round trip.
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        sqlx::query_as::<_, DashboardCounts>(
            "SELECT
                (SELECT COUNT(*) FROM assets) AS asset_count,
                (SELECT COUNT(*) FROM disposal_records) AS disposal_count,
                (SELECT COUNT(*) FROM maintenance_records) AS maintenance_count,
                (SELECT COUNT(*) FROM assets WHERE status = $1) AS usage_count,
                (SELECT COUNT(*) FROM software_assets) AS software_count,
                (SELECT COUNT(*) FROM assets WHERE status = $2) AS stock_count,
                (SELECT COUNT(*) FROM software_assets WHERE expiredstatus = $3) AS expiry_count",
        )
        .bind(STATUS_ASSIGNED)
        .bind(STATUS_STOCK)
        .bind(SOFTWARE_EXPIRED)
        .fetch_one(pool)
        .await
    }
}
