//! Integration tests for the asset repository's transactional operations.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Retire removes maintenance and in/out rows and keeps the asset as `disposed`
//! - Purge removes the asset and its dependents but leaves disposal history
//! - A missing asset yields `CascadeOutcome::Missing` with no writes
//! - `update_locked` writes the closure's result and returns `None` for unknown ids
//! - Dashboard counts reflect the stored rows

use assert_matches::assert_matches;
use assetdesk_core::lifecycle::STATUS_DISPOSED;
use assetdesk_db::models::asset::CreateAsset;
use assetdesk_db::models::in_out::CreateInOutRecord;
use assetdesk_db::models::maintenance::CreateMaintenanceRecord;
use assetdesk_db::models::software::CreateSoftwareAsset;
use assetdesk_db::repositories::{
    AssetRepo, CascadeOutcome, DashboardRepo, DisposalRepo, InOutRepo, MaintenanceRepo,
    SoftwareAssetRepo,
};
use chrono::NaiveDate;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_asset(pool: &PgPool, assetid: &str, status: &str) {
    let input = CreateAsset {
        assetid: Some(assetid.to_string()),
        make: Some("Dell".to_string()),
        ..Default::default()
    };
    AssetRepo::create(pool, assetid, Some(status), &input)
        .await
        .unwrap();
}

async fn seed_history(pool: &PgPool, assetid: &str) {
    MaintenanceRepo::create(
        pool,
        &CreateMaintenanceRecord {
            assetid: assetid.to_string(),
            issue: Some("Battery swelling".to_string()),
            cost: Some(42.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    InOutRepo::create(
        pool,
        &CreateInOutRecord {
            assetid: assetid.to_string(),
            userid: Some("U1".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Retire
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn retire_clears_history_and_marks_disposed(pool: PgPool) {
    seed_asset(&pool, "L1", "Assigned").await;
    seed_history(&pool, "L1").await;
    seed_history(&pool, "L1").await;

    let outcome = AssetRepo::retire(&pool, "L1").await.unwrap();
    assert_matches!(
        outcome,
        CascadeOutcome::Completed { ref asset, maintenance_removed: 2, in_out_removed: 2 }
            if asset.status.as_deref() == Some(STATUS_DISPOSED)
    );

    assert_eq!(MaintenanceRepo::count_for_asset(&pool, "L1").await.unwrap(), 0);
    assert_eq!(InOutRepo::count_for_asset(&pool, "L1").await.unwrap(), 0);

    let stored = AssetRepo::find_by_id(&pool, "L1").await.unwrap().unwrap();
    assert_eq!(stored.status.as_deref(), Some(STATUS_DISPOSED));
    assert_eq!(stored.make.as_deref(), Some("Dell"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn retire_without_history_still_completes(pool: PgPool) {
    seed_asset(&pool, "L2", "inStock").await;

    let outcome = AssetRepo::retire(&pool, "L2").await.unwrap();
    assert_matches!(
        outcome,
        CascadeOutcome::Completed { maintenance_removed: 0, in_out_removed: 0, .. }
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn retire_missing_asset_writes_nothing(pool: PgPool) {
    seed_asset(&pool, "L3", "Assigned").await;
    seed_history(&pool, "L3").await;

    let outcome = AssetRepo::retire(&pool, "NOPE").await.unwrap();
    assert_matches!(outcome, CascadeOutcome::Missing);

    assert_eq!(MaintenanceRepo::count_for_asset(&pool, "L3").await.unwrap(), 1);
    assert_eq!(InOutRepo::count_for_asset(&pool, "L3").await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Purge
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn purge_removes_asset_and_history_but_not_disposals(pool: PgPool) {
    seed_asset(&pool, "L4", "Stock").await;
    seed_history(&pool, "L4").await;
    DisposalRepo::create(&pool, "L4", date(2025, 3, 1), date(2025, 4, 1), "Obsolete")
        .await
        .unwrap();

    let outcome = AssetRepo::purge(&pool, "L4").await.unwrap();
    assert_matches!(
        outcome,
        CascadeOutcome::Completed { ref asset, maintenance_removed: 1, in_out_removed: 1 }
            if asset.assetid == "L4"
    );

    assert!(!AssetRepo::exists(&pool, "L4").await.unwrap());
    assert_eq!(MaintenanceRepo::count_for_asset(&pool, "L4").await.unwrap(), 0);
    assert_eq!(InOutRepo::count_for_asset(&pool, "L4").await.unwrap(), 0);

    let disposals = DisposalRepo::list_for_asset(&pool, "L4").await.unwrap();
    assert_eq!(disposals.len(), 1);
    assert_eq!(disposals[0].reason, "Obsolete");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn purge_missing_asset_is_reported(pool: PgPool) {
    let outcome = AssetRepo::purge(&pool, "NOPE").await.unwrap();
    assert_matches!(outcome, CascadeOutcome::Missing);
}

// ---------------------------------------------------------------------------
// Locked update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_locked_writes_closure_result(pool: PgPool) {
    seed_asset(&pool, "L5", "Assigned").await;

    let updated = AssetRepo::update_locked(&pool, "L5", |current| {
        let mut next = current.clone();
        next.location = Some("Pune".to_string());
        next.purchasedate = Some(date(2023, 6, 30));
        next
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.location.as_deref(), Some("Pune"));
    assert_eq!(updated.purchasedate, Some(date(2023, 6, 30)));
    assert_eq!(updated.make.as_deref(), Some("Dell"));
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_locked_unknown_id_returns_none(pool: PgPool) {
    let result = AssetRepo::update_locked(&pool, "NOPE", |current| current.clone())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Uniqueness and counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_asset_id_is_a_unique_violation(pool: PgPool) {
    seed_asset(&pool, "L6", "inStock").await;

    let input = CreateAsset {
        assetid: Some("L6".to_string()),
        ..Default::default()
    };
    let err = AssetRepo::create(&pool, "L6", None, &input)
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.is_unique_violation());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_counts_match_rows(pool: PgPool) {
    seed_asset(&pool, "C1", "Assigned").await;
    seed_asset(&pool, "C2", "Assigned").await;
    seed_asset(&pool, "C3", "Stock").await;
    seed_history(&pool, "C3").await;

    for (id, expired) in [("S1", "Yes"), ("S2", "Yes"), ("S3", "No")] {
        let input = CreateSoftwareAsset {
            softwareid: Some(id.to_string()),
            expiredstatus: Some(expired.to_string()),
            ..Default::default()
        };
        SoftwareAssetRepo::create(&pool, id, &input).await.unwrap();
    }

    let counts = DashboardRepo::counts(&pool).await.unwrap();
    assert_eq!(counts.asset_count, 3);
    assert_eq!(counts.usage_count, 2);
    assert_eq!(counts.stock_count, 1);
    assert_eq!(counts.maintenance_count, 1);
    assert_eq!(counts.software_count, 3);
    assert_eq!(counts.expiry_count, 2);
    assert_eq!(counts.disposal_count, 0);
}
