//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, where the API accepts writes
//! - A `Deserialize` update DTO (all `Patch` fields) for partial updates

pub mod asset;
pub mod dashboard;
pub mod disposal;
pub mod in_out;
pub mod maintenance;
pub mod personnel;
pub mod software;
