//! Asset lifecycle manager.
//!
//! Orchestrates every state-changing operation on assets and software
//! licenses: required-field validation, uniqueness and existence checks,
//! status derivation, and the transactional retire/purge cascade.
//!
//! Uniqueness pre-checks are only there to give a friendly error. The
//! primary key is authoritative: a unique violation raised by the insert
//! itself is reported as the same [`CoreError::Conflict`].

use assetdesk_core::error::CoreError;
use assetdesk_core::lifecycle::{is_known_status, status_on_create, status_on_update};
use assetdesk_core::validation;
use assetdesk_db::models::asset::{Asset, CreateAsset, UpdateAsset};
use assetdesk_db::models::disposal::{DisposalRecord, RecordDisposal};
use assetdesk_db::models::software::{CreateSoftwareAsset, SoftwareAsset};
use assetdesk_db::repositories::{AssetRepo, CascadeOutcome, DisposalRepo, SoftwareAssetRepo};
use assetdesk_db::DbPool;

use crate::error::{is_unique_violation, AppError, AppResult};

/// Handles create/update/retire/purge transitions against the store.
///
/// Holds its own handle to the connection pool; cloning is cheap.
#[derive(Clone)]
pub struct AssetLifecycle {
    pool: DbPool,
}

impl AssetLifecycle {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Register a new asset.
    ///
    /// Without an assignee the stored status is always `inStock`; with one,
    /// the requested status is kept verbatim.
    pub async fn create_asset(&self, input: &CreateAsset) -> AppResult<Asset> {
        let assetid = validation::require("Asset ID", input.assetid.as_deref())?;

        if AssetRepo::exists(&self.pool, assetid).await? {
            return Err(asset_conflict());
        }

        let status = status_on_create(input.assigneduserid.as_deref(), input.status.as_deref());
        warn_unknown_status(assetid, status.as_deref());

        let asset = AssetRepo::create(&self.pool, assetid, status.as_deref(), input)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    asset_conflict()
                } else {
                    AppError::Database(e)
                }
            })?;

        tracing::info!(
            asset_id = %asset.assetid,
            status = asset.status.as_deref().unwrap_or_default(),
            "Asset created",
        );
        Ok(asset)
    }

    /// Merge a partial update into an existing asset.
    ///
    /// Clearing the assignee of a previously assigned asset forces the status
    /// to `Unassigned`; any other update keeps the merged status.
    pub async fn update_asset(&self, assetid: &str, input: &UpdateAsset) -> AppResult<Asset> {
        let assetid = validation::require_path_id("Asset", assetid)?;

        let asset = AssetRepo::update_locked(&self.pool, assetid, |existing| {
            let mut next = existing.merged_with(input);
            next.status = status_on_update(
                existing.assigneduserid.as_deref(),
                next.assigneduserid.as_deref(),
                next.status.as_deref(),
            );
            next
        })
        .await?
        .ok_or_else(|| CoreError::not_found("Asset", assetid))?;

        warn_unknown_status(assetid, asset.status.as_deref());
        tracing::info!(
            asset_id = %asset.assetid,
            status = asset.status.as_deref().unwrap_or_default(),
            "Asset updated",
        );
        Ok(asset)
    }

    /// Soft-retire an asset: drop its maintenance and in/out rows and mark it
    /// `disposed`. Returns the retired row.
    pub async fn retire_asset(&self, assetid: &str) -> AppResult<Asset> {
        let assetid = validation::require_path_id("Asset", assetid)?;
        let outcome = AssetRepo::retire(&self.pool, assetid).await?;
        finish_cascade(outcome, assetid, "Failed to update asset status", "Asset retired")
    }

    /// Hard-delete an asset: drop its maintenance and in/out rows and then
    /// the asset itself. Disposal history is kept. Returns the deleted row.
    pub async fn purge_asset(&self, assetid: &str) -> AppResult<Asset> {
        let assetid = validation::require_path_id("Asset", assetid)?;
        let outcome = AssetRepo::purge(&self.pool, assetid).await?;
        finish_cascade(outcome, assetid, "Failed to delete asset", "Asset purged")
    }

    /// Append a disposal record. The asset itself is not consulted.
    pub async fn record_disposal(&self, input: &RecordDisposal) -> AppResult<DisposalRecord> {
        let (Some(assetid), Some(repaired_on), Some(disposaldate), Some(reason)) = (
            input.assetid.as_deref(),
            input.repaired_on,
            input.disposaldate,
            input.reason.as_deref(),
        ) else {
            return Err(validation::missing_fields(&[
                ("assetid", input.assetid.is_none()),
                ("repaired_on", input.repaired_on.is_none()),
                ("disposaldate", input.disposaldate.is_none()),
                ("reason", input.reason.is_none()),
            ])
            .into());
        };

        let record =
            DisposalRepo::create(&self.pool, assetid, repaired_on, disposaldate, reason).await?;

        tracing::info!(
            disposal_id = record.id,
            asset_id = %record.assetid,
            "Disposal record added",
        );
        Ok(record)
    }

    /// Register a software license. No fields are derived.
    pub async fn create_software(&self, input: &CreateSoftwareAsset) -> AppResult<SoftwareAsset> {
        let softwareid = validation::require("Software ID", input.softwareid.as_deref())?;

        if SoftwareAssetRepo::exists(&self.pool, softwareid).await? {
            return Err(software_conflict());
        }

        let software = SoftwareAssetRepo::create(&self.pool, softwareid, input)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    software_conflict()
                } else {
                    AppError::Database(e)
                }
            })?;

        tracing::info!(software_id = %software.softwareid, "Software asset created");
        Ok(software)
    }

    /// Delete a software license and return the removed row.
    pub async fn delete_software(&self, softwareid: &str) -> AppResult<SoftwareAsset> {
        let softwareid = validation::require_path_id("Software", softwareid)?;

        let software = SoftwareAssetRepo::delete(&self.pool, softwareid)
            .await?
            .ok_or_else(|| CoreError::not_found("SoftwareAsset", softwareid))?;

        tracing::info!(software_id = %software.softwareid, "Software asset deleted");
        Ok(software)
    }
}

fn asset_conflict() -> AppError {
    CoreError::Conflict("Asset ID already exists".into()).into()
}

fn software_conflict() -> AppError {
    CoreError::Conflict("Software ID already exists".into()).into()
}

/// Free-form statuses are stored as sent but do not show up in any
/// dashboard count.
fn warn_unknown_status(assetid: &str, status: Option<&str>) {
    if let Some(status) = status.filter(|s| !is_known_status(s)) {
        tracing::warn!(asset_id = %assetid, status, "Storing unrecognised asset status");
    }
}

/// Translate a cascade outcome into the operation result.
fn finish_cascade(
    outcome: CascadeOutcome,
    assetid: &str,
    failure: &str,
    done: &'static str,
) -> AppResult<Asset> {
    match outcome {
        CascadeOutcome::Missing => Err(CoreError::not_found("Asset", assetid).into()),
        CascadeOutcome::ParentUnaffected => Err(AppError::InternalError(format!(
            "{failure}: {assetid}"
        ))),
        CascadeOutcome::Completed {
            asset,
            maintenance_removed,
            in_out_removed,
        } => {
            tracing::info!(
                asset_id = %asset.assetid,
                maintenance_removed,
                in_out_removed,
                "{}",
                done,
            );
            Ok(asset)
        }
    }
}
