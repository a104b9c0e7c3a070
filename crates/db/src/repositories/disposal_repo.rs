//! Repository for the append-only `disposal_records` table.

use assetdesk_core::types::Date;
use sqlx::PgPool;

use crate::models::disposal::DisposalRecord;

const COLUMNS: &str = "id, assetid, repaired_on, disposaldate, reason, created_at";

/// Appends and reads disposal history. There is deliberately no update or
/// delete.
pub struct DisposalRepo;

impl DisposalRepo {
    /// Append a disposal record. The asset row is neither read nor checked.
    pub async fn create(
        pool: &PgPool,
        assetid: &str,
        repaired_on: Date,
        disposaldate: Date,
        reason: &str,
    ) -> Result<DisposalRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO disposal_records (assetid, repaired_on, disposaldate, reason)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DisposalRecord>(&query)
            .bind(assetid)
            .bind(repaired_on)
            .bind(disposaldate)
            .bind(reason)
            .fetch_one(pool)
            .await
    }

    /// List all disposal records, most recent disposal first.
    pub async fn list(pool: &PgPool) -> Result<Vec<DisposalRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM disposal_records ORDER BY disposaldate DESC, id DESC"
        );
        sqlx::query_as::<_, DisposalRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// Disposal history of a single asset, oldest first.
    pub async fn list_for_asset(
        pool: &PgPool,
        assetid: &str,
    ) -> Result<Vec<DisposalRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disposal_records WHERE assetid = $1 ORDER BY id");
        sqlx::query_as::<_, DisposalRecord>(&query)
            .bind(assetid)
            .fetch_all(pool)
            .await
    }
}
