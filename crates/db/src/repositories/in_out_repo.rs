//! Repository for the `in_out_records` table.
//!
//! Rows are removed only by the asset retire/purge cascade in
//! [`AssetRepo`](super::AssetRepo).

use sqlx::PgPool;

use crate::models::in_out::{CreateInOutRecord, InOutRecord};

const COLUMNS: &str = "id, assetid, userid, checkout_date, checkin_date, remarks, created_at";

/// Provides insert and read access to asset movements.
pub struct InOutRepo;

impl InOutRepo {
    /// Log a check-out / check-in movement. The asset must exist (foreign key).
    pub async fn create(
        pool: &PgPool,
        input: &CreateInOutRecord,
    ) -> Result<InOutRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO in_out_records (assetid, userid, checkout_date, checkin_date, remarks)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InOutRecord>(&query)
            .bind(&input.assetid)
            .bind(&input.userid)
            .bind(input.checkout_date)
            .bind(input.checkin_date)
            .bind(&input.remarks)
            .fetch_one(pool)
            .await
    }

    /// List all movements ordered by asset.
    pub async fn list(pool: &PgPool) -> Result<Vec<InOutRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM in_out_records ORDER BY assetid, id");
        sqlx::query_as::<_, InOutRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count the movements logged against one asset.
    pub async fn count_for_asset(pool: &PgPool, assetid: &str) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM in_out_records WHERE assetid = $1")
            .bind(assetid)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
