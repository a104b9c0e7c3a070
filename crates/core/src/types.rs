/// Surrogate keys of append-only tables (maintenance, in/out, disposal) are BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (purchase, warranty, check-in/out) carry no time component.
pub type Date = chrono::NaiveDate;
