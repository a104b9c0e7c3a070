//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod asset_repo;
pub mod dashboard_repo;
pub mod disposal_repo;
pub mod in_out_repo;
pub mod maintenance_repo;
pub mod personnel_repo;
pub mod software_repo;

pub use asset_repo::{AssetRepo, CascadeOutcome};
pub use dashboard_repo::DashboardRepo;
pub use disposal_repo::DisposalRepo;
pub use in_out_repo::InOutRepo;
pub use maintenance_repo::MaintenanceRepo;
pub use personnel_repo::PersonnelRepo;
pub use software_repo::SoftwareAssetRepo;
