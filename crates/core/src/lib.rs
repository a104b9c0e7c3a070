//! Domain building blocks shared by the database and API crates.
//!
//! Nothing in here touches the database or HTTP: the lifecycle status rules,
//! required-field validation and request normalisation are plain functions so
//! they can be unit tested in isolation.

pub mod error;
pub mod input;
pub mod lifecycle;
pub mod types;
pub mod validation;
