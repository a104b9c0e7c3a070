//! Required-field checks for lifecycle inputs.

use crate::error::CoreError;

/// Return the trimmed value of a required text field.
///
/// A missing, empty or whitespace-only value is a [`CoreError::Validation`].
pub fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Validation error naming every field flagged as absent.
///
/// Use it as the failure arm of a pattern that extracts all required fields
/// at once, so the caller can fix the request in one round trip.
pub fn missing_fields(fields: &[(&str, bool)]) -> CoreError {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();

    CoreError::Validation(format!(
        "All fields are required; missing: {}",
        missing.join(", ")
    ))
}

/// Validate an id taken from a request path.
pub fn require_path_id<'a>(entity: &str, id: &'a str) -> Result<&'a str, CoreError> {
    require(&format!("{entity} ID"), Some(id))
}
