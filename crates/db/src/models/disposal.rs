//! Disposal audit record model and DTO.

use assetdesk_core::input::blank_as_none;
use assetdesk_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the append-only `disposal_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DisposalRecord {
    pub id: DbId,
    pub assetid: String,
    pub repaired_on: Date,
    pub disposaldate: Date,
    pub reason: String,
    pub created_at: Timestamp,
}

/// DTO for appending a disposal record. Every field is required; blanks are
/// read as missing so the handler can report them together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordDisposal {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub assetid: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub repaired_on: Option<Date>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub disposaldate: Option<Date>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub reason: Option<String>,
}
