//! Repository for the `maintenance_records` table.
//!
//! Rows are removed only by the asset retire/purge cascade in
//! [`AssetRepo`](super::AssetRepo).

use sqlx::PgPool;

use crate::models::maintenance::{CreateMaintenanceRecord, MaintenanceRecord};

const COLUMNS: &str =
    "id, assetid, issue, maintenance_date, vendor, cost, status, remarks, created_at";

/// Provides insert and read access to maintenance events.
pub struct MaintenanceRepo;

impl MaintenanceRepo {
    /// Log a maintenance event. The asset must exist (foreign key).
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaintenanceRecord,
    ) -> Result<MaintenanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_records
                (assetid, issue, maintenance_date, vendor, cost, status, remarks)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(&input.assetid)
            .bind(&input.issue)
            .bind(input.maintenance_date)
            .bind(&input.vendor)
            .bind(input.cost)
            .bind(&input.status)
            .bind(&input.remarks)
            .fetch_one(pool)
            .await
    }

    /// List all maintenance events ordered by asset.
    pub async fn list(pool: &PgPool) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_records ORDER BY assetid, id");
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count the events logged against one asset.
    pub async fn count_for_asset(pool: &PgPool, assetid: &str) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM maintenance_records WHERE assetid = $1")
                .bind(assetid)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
