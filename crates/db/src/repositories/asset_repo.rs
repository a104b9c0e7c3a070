//! Repository for the `assets` table.
//!
//! Multi-statement lifecycle transitions (merge-update, retire, purge) run
//! inside a single transaction so a failure leaves no partial effect.

use assetdesk_core::lifecycle::STATUS_DISPOSED;
use sqlx::{PgConnection, PgPool};

use crate::models::asset::{Asset, CreateAsset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "assetid, assettype, make, productid, purchasedate, retailer, \
     warrantyexpiry, assigneduserid, location, status, lastcheckoutdate, size, \
     operatingsystem, typeofos, productkey, processor, ram, harddisktype, harddisksize, \
     harddiskmodel, resolution, graphicscardmodel, externaldongledetails, check_in, \
     created_at, updated_at";

/// Outcome of a transactional retire or purge.
#[derive(Debug)]
pub enum CascadeOutcome {
    /// No asset with that id. Nothing was written.
    Missing,
    /// The final statement on the asset row affected nothing. The dependent
    /// deletions were rolled back with it.
    ParentUnaffected,
    /// All statements committed.
    Completed {
        /// The asset row after retiring, or as it was before purging.
        asset: Asset,
        maintenance_removed: u64,
        in_out_removed: u64,
    },
}

/// Provides CRUD and lifecycle operations for hardware assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Whether an asset with this id exists.
    pub async fn exists(pool: &PgPool, assetid: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM assets WHERE assetid = $1)")
            .bind(assetid)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Find an asset by id.
    pub async fn find_by_id(pool: &PgPool, assetid: &str) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE assetid = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(assetid)
            .fetch_optional(pool)
            .await
    }

    /// List all assets ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY assetid");
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }

    /// Insert a new asset with an already-validated id and derived status.
    ///
    /// A duplicate id fails with the primary key's unique violation.
    pub async fn create(
        pool: &PgPool,
        assetid: &str,
        status: Option<&str>,
        input: &CreateAsset,
    ) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (
                assetid, assettype, make, productid, purchasedate, retailer,
                warrantyexpiry, assigneduserid, location, status, lastcheckoutdate, size,
                operatingsystem, typeofos, productkey, processor, ram, harddisktype,
                harddisksize, harddiskmodel, resolution, graphicscardmodel,
                externaldongledetails, check_in)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(assetid)
            .bind(&input.assettype)
            .bind(&input.make)
            .bind(&input.productid)
            .bind(input.purchasedate)
            .bind(&input.retailer)
            .bind(input.warrantyexpiry)
            .bind(&input.assigneduserid)
            .bind(&input.location)
            .bind(status)
            .bind(input.lastcheckoutdate)
            .bind(&input.size)
            .bind(&input.operatingsystem)
            .bind(&input.typeofos)
            .bind(&input.productkey)
            .bind(&input.processor)
            .bind(&input.ram)
            .bind(&input.harddisktype)
            .bind(&input.harddisksize)
            .bind(&input.harddiskmodel)
            .bind(&input.resolution)
            .bind(&input.graphicscardmodel)
            .bind(&input.externaldongledetails)
            .bind(input.check_in)
            .fetch_one(pool)
            .await
    }

    /// Lock the asset row, compute its replacement with `apply`, and write
    /// every mutable column back in the same transaction.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update_locked<F>(
        pool: &PgPool,
        assetid: &str,
        apply: F,
    ) -> Result<Option<Asset>, sqlx::Error>
    where
        F: FnOnce(&Asset) -> Asset,
    {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM assets WHERE assetid = $1 FOR UPDATE");
        let Some(existing) = sqlx::query_as::<_, Asset>(&select)
            .bind(assetid)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let next = apply(&existing);

        let query = format!(
            "UPDATE assets SET
                assettype = $2,
                make = $3,
                productid = $4,
                purchasedate = $5,
                retailer = $6,
                warrantyexpiry = $7,
                assigneduserid = $8,
                location = $9,
                status = $10,
                lastcheckoutdate = $11,
                size = $12,
                operatingsystem = $13,
                typeofos = $14,
                productkey = $15,
                processor = $16,
                ram = $17,
                harddisktype = $18,
                harddisksize = $19,
                harddiskmodel = $20,
                resolution = $21,
                graphicscardmodel = $22,
                externaldongledetails = $23,
                check_in = $24,
                updated_at = NOW()
             WHERE assetid = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Asset>(&query)
            .bind(assetid)
            .bind(&next.assettype)
            .bind(&next.make)
            .bind(&next.productid)
            .bind(next.purchasedate)
            .bind(&next.retailer)
            .bind(next.warrantyexpiry)
            .bind(&next.assigneduserid)
            .bind(&next.location)
            .bind(&next.status)
            .bind(next.lastcheckoutdate)
            .bind(&next.size)
            .bind(&next.operatingsystem)
            .bind(&next.typeofos)
            .bind(&next.productkey)
            .bind(&next.processor)
            .bind(&next.ram)
            .bind(&next.harddisktype)
            .bind(&next.harddisksize)
            .bind(&next.harddiskmodel)
            .bind(&next.resolution)
            .bind(&next.graphicscardmodel)
            .bind(&next.externaldongledetails)
            .bind(next.check_in)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Soft-retire: remove maintenance and in/out rows, then mark the asset
    /// `disposed`. The asset row is kept.
    pub async fn retire(pool: &PgPool, assetid: &str) -> Result<CascadeOutcome, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET status = $2, updated_at = NOW()
             WHERE assetid = $1
             RETURNING {COLUMNS}"
        );
        Self::cascade(pool, assetid, &query, Some(STATUS_DISPOSED)).await
    }

    /// Hard-delete: remove maintenance and in/out rows, then the asset row.
    /// Disposal records are left untouched.
    pub async fn purge(pool: &PgPool, assetid: &str) -> Result<CascadeOutcome, sqlx::Error> {
        let query = format!("DELETE FROM assets WHERE assetid = $1 RETURNING {COLUMNS}");
        Self::cascade(pool, assetid, &query, None).await
    }

    /// Shared body of [`retire`](Self::retire) and [`purge`](Self::purge).
    ///
    /// Order is fixed: existence check (row lock), maintenance deletion,
    /// in/out deletion, then `parent_sql` against the asset row.
    async fn cascade(
        pool: &PgPool,
        assetid: &str,
        parent_sql: &str,
        status: Option<&str>,
    ) -> Result<CascadeOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(String,)> =
            sqlx::query_as("SELECT assetid FROM assets WHERE assetid = $1 FOR UPDATE")
                .bind(assetid)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Ok(CascadeOutcome::Missing);
        }

        let (maintenance_removed, in_out_removed) = delete_dependents(&mut tx, assetid).await?;

        let mut parent = sqlx::query_as::<_, Asset>(parent_sql).bind(assetid);
        if let Some(status) = status {
            parent = parent.bind(status);
        }
        let Some(asset) = parent.fetch_optional(&mut *tx).await? else {
            tx.rollback().await?;
            return Ok(CascadeOutcome::ParentUnaffected);
        };

        tx.commit().await?;
        Ok(CascadeOutcome::Completed {
            asset,
            maintenance_removed,
            in_out_removed,
        })
    }
}

/// Delete the rows owned by an asset, maintenance first. Returns the number
/// of maintenance and in/out rows removed.
async fn delete_dependents(
    conn: &mut PgConnection,
    assetid: &str,
) -> Result<(u64, u64), sqlx::Error> {
    let maintenance = sqlx::query("DELETE FROM maintenance_records WHERE assetid = $1")
        .bind(assetid)
        .execute(&mut *conn)
        .await?;

    let in_out = sqlx::query("DELETE FROM in_out_records WHERE assetid = $1")
        .bind(assetid)
        .execute(&mut *conn)
        .await?;

    Ok((maintenance.rows_affected(), in_out.rows_affected()))
}
