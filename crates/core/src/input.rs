//! Request normalisation helpers.
//!
//! Front ends submit empty form fields as `""`. For date and reference
//! columns an empty string means "no value", so these serde helpers map blank
//! strings to `None` before anything reaches the database.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// A partial-update field.
///
/// - `None`: field absent from the request, keep the stored value.
/// - `Some(None)`: field explicitly cleared (`null` or `""`).
/// - `Some(Some(v))`: field set to `v`.
pub type Patch<T> = Option<Option<T>>;

/// Deserialize an optional value, treating `null`, `""` and whitespace-only
/// strings as `None`. Non-blank strings are parsed with [`FromStr`].
///
/// Use with `#[serde(default, deserialize_with = "blank_as_none")]`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    parse_non_blank(raw.map(Scalar::into_text)).map_err(serde::de::Error::custom)
}

/// Deserialize a [`Patch`] field. Only invoked when the key is present, so
/// combined with `#[serde(default)]` an absent key stays `None` while `null`
/// or a blank string becomes `Some(None)`.
///
/// Use with `#[serde(default, deserialize_with = "patch")]`.
pub fn patch<'de, D, T>(deserializer: D) -> Result<Patch<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    parse_non_blank(raw.map(Scalar::into_text))
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// Deserialize an optional free-text field verbatim. Bare numbers and
/// booleans are accepted and stored as their text form; blanks are kept.
///
/// Use with `#[serde(default, deserialize_with = "text")]`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// Overlay a [`Patch`] on the stored value.
pub fn merge<T>(current: Option<T>, patch: Patch<T>) -> Option<T> {
    match patch {
        Some(value) => value,
        None => current,
    }
}

/// JSON scalar accepted for any column. Forms send numbers either quoted or bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

fn parse_non_blank<T>(raw: Option<String>) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| format!("invalid value '{s}': {e}")),
        _ => Ok(None),
    }
}
