//! Repository for the `software_assets` table.

use sqlx::PgPool;

use crate::models::software::{CreateSoftwareAsset, SoftwareAsset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "softwareid, softwarename, softwareversion, purchasedate, assetid, \
     licensetype, licenseexpirydate, assigneduserid, project, userstatus, vendor, \
     licensepurchasedate, licensekey, serialnumber, licenseduration, licensecost, \
     username, password, expiredstatus, renewaldate, renewalcost, comments, created_at";

/// Provides CRUD operations for software licenses.
pub struct SoftwareAssetRepo;

impl SoftwareAssetRepo {
    /// Whether a license with this id exists.
    pub async fn exists(pool: &PgPool, softwareid: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM software_assets WHERE softwareid = $1)")
                .bind(softwareid)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Insert a license under an already-validated id.
    pub async fn create(
        pool: &PgPool,
        softwareid: &str,
        input: &CreateSoftwareAsset,
    ) -> Result<SoftwareAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO software_assets (
                softwareid, softwarename, softwareversion, purchasedate, assetid,
                licensetype, licenseexpirydate, assigneduserid, project, userstatus,
                vendor, licensepurchasedate, licensekey, serialnumber, licenseduration,
                licensecost, username, password, expiredstatus, renewaldate,
                renewalcost, comments)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                     $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SoftwareAsset>(&query)
            .bind(softwareid)
            .bind(&input.softwarename)
            .bind(&input.softwareversion)
            .bind(input.purchasedate)
            .bind(&input.assetid)
            .bind(&input.licensetype)
            .bind(input.licenseexpirydate)
            .bind(&input.assigneduserid)
            .bind(&input.project)
            .bind(&input.userstatus)
            .bind(&input.vendor)
            .bind(input.licensepurchasedate)
            .bind(&input.licensekey)
            .bind(&input.serialnumber)
            .bind(&input.licenseduration)
            .bind(input.licensecost)
            .bind(&input.username)
            .bind(&input.password)
            .bind(&input.expiredstatus)
            .bind(input.renewaldate)
            .bind(input.renewalcost)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
    }

    /// Find a license by id.
    pub async fn find_by_id(
        pool: &PgPool,
        softwareid: &str,
    ) -> Result<Option<SoftwareAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM software_assets WHERE softwareid = $1");
        sqlx::query_as::<_, SoftwareAsset>(&query)
            .bind(softwareid)
            .fetch_optional(pool)
            .await
    }

    /// List all licenses ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<SoftwareAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM software_assets ORDER BY softwareid");
        sqlx::query_as::<_, SoftwareAsset>(&query)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a license, returning the removed row.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn delete(
        pool: &PgPool,
        softwareid: &str,
    ) -> Result<Option<SoftwareAsset>, sqlx::Error> {
        let query = format!("DELETE FROM software_assets WHERE softwareid = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, SoftwareAsset>(&query)
            .bind(softwareid)
            .fetch_optional(pool)
            .await
    }
}
