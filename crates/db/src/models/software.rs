//! Software license model and DTO.

use assetdesk_core::input::{blank_as_none, text};
use assetdesk_core::types::{Date, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `software_assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SoftwareAsset {
    pub softwareid: String,
    pub softwarename: Option<String>,
    pub softwareversion: Option<String>,
    pub purchasedate: Option<Date>,
    /// Soft reference to the hardware the license is installed on.
    pub assetid: Option<String>,
    pub licensetype: Option<String>,
    pub licenseexpirydate: Option<Date>,
    /// Soft reference to the licensee.
    pub assigneduserid: Option<String>,
    pub project: Option<String>,
    pub userstatus: Option<String>,
    pub vendor: Option<String>,
    pub licensepurchasedate: Option<Date>,
    pub licensekey: Option<String>,
    pub serialnumber: Option<String>,
    pub licenseduration: Option<String>,
    pub licensecost: Option<f64>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// `"Yes"` marks an expired license for the dashboard.
    pub expiredstatus: Option<String>,
    pub renewaldate: Option<Date>,
    pub renewalcost: Option<f64>,
    pub comments: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for registering a software license. Blank dates, costs and
/// references are stored as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSoftwareAsset {
    #[serde(default, deserialize_with = "text")]
    pub softwareid: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub softwarename: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub softwareversion: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub purchasedate: Option<Date>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub assetid: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub licensetype: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub licenseexpirydate: Option<Date>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub assigneduserid: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub project: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub userstatus: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub vendor: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub licensepurchasedate: Option<Date>,
    #[serde(default, deserialize_with = "text")]
    pub licensekey: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub serialnumber: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub licenseduration: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub licensecost: Option<f64>,
    #[serde(default, deserialize_with = "text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub expiredstatus: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub renewaldate: Option<Date>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub renewalcost: Option<f64>,
    #[serde(default, deserialize_with = "text")]
    pub comments: Option<String>,
}
