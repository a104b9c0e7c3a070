//! Hardware asset model and DTOs.

use assetdesk_core::input::{blank_as_none, merge, patch, text, Patch};
use assetdesk_core::types::{Date, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub assetid: String,
    pub assettype: Option<String>,
    pub make: Option<String>,
    pub productid: Option<String>,
    pub purchasedate: Option<Date>,
    pub retailer: Option<String>,
    pub warrantyexpiry: Option<Date>,
    pub assigneduserid: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub lastcheckoutdate: Option<Date>,
    pub size: Option<String>,
    pub operatingsystem: Option<String>,
    pub typeofos: Option<String>,
    pub productkey: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub harddisktype: Option<String>,
    pub harddisksize: Option<String>,
    pub harddiskmodel: Option<String>,
    pub resolution: Option<String>,
    pub graphicscardmodel: Option<String>,
    pub externaldongledetails: Option<String>,
    pub check_in: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new asset.
///
/// `assetid` is optional here so a missing id surfaces as a validation error
/// rather than a JSON rejection. Date and assignee fields treat `""` as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAsset {
    #[serde(default, deserialize_with = "text")]
    pub assetid: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub assettype: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub make: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub productid: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub purchasedate: Option<Date>,
    #[serde(default, deserialize_with = "text")]
    pub retailer: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub warrantyexpiry: Option<Date>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub assigneduserid: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub location: Option<String>,
    /// Only honoured when an assignee is present.
    #[serde(default, deserialize_with = "text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub lastcheckoutdate: Option<Date>,
    #[serde(default, deserialize_with = "text")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub operatingsystem: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub typeofos: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub productkey: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub processor: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub ram: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub harddisktype: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub harddisksize: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub harddiskmodel: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub resolution: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub graphicscardmodel: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub externaldongledetails: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub check_in: Option<Date>,
}

/// DTO for partially updating an asset.
///
/// Absent keys keep the stored value; `null` or `""` clears it. `assetid` is
/// immutable and ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAsset {
    #[serde(default, deserialize_with = "patch")]
    pub assettype: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub make: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub productid: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub purchasedate: Patch<Date>,
    #[serde(default, deserialize_with = "patch")]
    pub retailer: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub warrantyexpiry: Patch<Date>,
    #[serde(default, deserialize_with = "patch")]
    pub assigneduserid: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub location: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub status: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub lastcheckoutdate: Patch<Date>,
    #[serde(default, deserialize_with = "patch")]
    pub size: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub operatingsystem: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub typeofos: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub productkey: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub processor: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub ram: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub harddisktype: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub harddisksize: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub harddiskmodel: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub resolution: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub graphicscardmodel: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub externaldongledetails: Patch<String>,
    #[serde(default, deserialize_with = "patch")]
    pub check_in: Patch<Date>,
}

impl Asset {
    /// Overlay the fields present in `update` on a copy of this row.
    ///
    /// `status` is merged like any other field; callers apply the lifecycle
    /// rule on top of the result.
    pub fn merged_with(&self, update: &UpdateAsset) -> Asset {
        let u = update.clone();
        Asset {
            assetid: self.assetid.clone(),
            assettype: merge(self.assettype.clone(), u.assettype),
            make: merge(self.make.clone(), u.make),
            productid: merge(self.productid.clone(), u.productid),
            purchasedate: merge(self.purchasedate, u.purchasedate),
            retailer: merge(self.retailer.clone(), u.retailer),
            warrantyexpiry: merge(self.warrantyexpiry, u.warrantyexpiry),
            assigneduserid: merge(self.assigneduserid.clone(), u.assigneduserid),
            location: merge(self.location.clone(), u.location),
            status: merge(self.status.clone(), u.status),
            lastcheckoutdate: merge(self.lastcheckoutdate, u.lastcheckoutdate),
            size: merge(self.size.clone(), u.size),
            operatingsystem: merge(self.operatingsystem.clone(), u.operatingsystem),
            typeofos: merge(self.typeofos.clone(), u.typeofos),
            productkey: merge(self.productkey.clone(), u.productkey),
            processor: merge(self.processor.clone(), u.processor),
            ram: merge(self.ram.clone(), u.ram),
            harddisktype: merge(self.harddisktype.clone(), u.harddisktype),
            harddisksize: merge(self.harddisksize.clone(), u.harddisksize),
            harddiskmodel: merge(self.harddiskmodel.clone(), u.harddiskmodel),
            resolution: merge(self.resolution.clone(), u.resolution),
            graphicscardmodel: merge(self.graphicscardmodel.clone(), u.graphicscardmodel),
            externaldongledetails: merge(
                self.externaldongledetails.clone(),
                u.externaldongledetails,
            ),
            check_in: merge(self.check_in, u.check_in),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn stored() -> Asset {
        Asset {
            assetid: "A2".to_string(),
            assettype: Some("Laptop".to_string()),
            make: Some("Lenovo".to_string()),
            productid: None,
            purchasedate: NaiveDate::from_ymd_opt(2023, 5, 10),
            retailer: None,
            warrantyexpiry: NaiveDate::from_ymd_opt(2026, 5, 10),
            assigneduserid: Some("U1".to_string()),
            location: Some("Chennai".to_string()),
            status: Some("Assigned".to_string()),
            lastcheckoutdate: None,
            size: None,
            operatingsystem: Some("Windows 11".to_string()),
            typeofos: None,
            productkey: None,
            processor: Some("i7".to_string()),
            ram: Some("16GB".to_string()),
            harddisktype: None,
            harddisksize: None,
            harddiskmodel: None,
            resolution: None,
            graphicscardmodel: None,
            externaldongledetails: None,
            check_in: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn omitted_fields_keep_stored_values() {
        let update: UpdateAsset = serde_json::from_str(r#"{"location": "Pune"}"#).unwrap();
        let merged = stored().merged_with(&update);

        assert_eq!(merged.location.as_deref(), Some("Pune"));
        assert_eq!(merged.make.as_deref(), Some("Lenovo"));
        assert_eq!(merged.assigneduserid.as_deref(), Some("U1"));
        assert_eq!(merged.status.as_deref(), Some("Assigned"));
        assert_eq!(merged.warrantyexpiry, NaiveDate::from_ymd_opt(2026, 5, 10));
    }

    #[test]
    fn null_and_blank_clear_fields() {
        let update: UpdateAsset =
            serde_json::from_str(r#"{"assigneduserid": null, "warrantyexpiry": ""}"#).unwrap();
        let merged = stored().merged_with(&update);

        assert_eq!(merged.assigneduserid, None);
        assert_eq!(merged.warrantyexpiry, None);
        assert_eq!(merged.purchasedate, NaiveDate::from_ymd_opt(2023, 5, 10));
    }

    #[test]
    fn assetid_in_body_is_ignored() {
        let update: UpdateAsset = serde_json::from_str(r#"{"assetid": "OTHER"}"#).unwrap();
        assert_eq!(stored().merged_with(&update).assetid, "A2");
    }

    #[test]
    fn create_normalises_blank_dates_and_assignee() {
        let input: CreateAsset = serde_json::from_str(
            r#"{"assetid": "A1", "assigneduserid": "", "purchasedate": "", "check_in": "", "status": "Assigned", "make": ""}"#,
        )
        .unwrap();

        assert_eq!(input.assigneduserid, None);
        assert_eq!(input.purchasedate, None);
        assert_eq!(input.check_in, None);
        assert_eq!(input.status.as_deref(), Some("Assigned"));
        // Free-text columns are stored as sent.
        assert_eq!(input.make.as_deref(), Some(""));
    }

    #[test]
    fn create_accepts_numeric_form_values() {
        let input: CreateAsset =
            serde_json::from_str(r#"{"assetid": 101, "ram": 16, "harddisksize": 512}"#).unwrap();

        assert_eq!(input.assetid.as_deref(), Some("101"));
        assert_eq!(input.ram.as_deref(), Some("16"));
        assert_eq!(input.harddisksize.as_deref(), Some("512"));
    }
}
