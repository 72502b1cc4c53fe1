use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CatalogError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// A single catalog entry. Identity is positional; the record itself carries
/// no id field.
pub struct MovieRecord {
    pub title: String,
    pub genre: String,
    pub year: i64,
    pub director: String,
}

impl MovieRecord {
    /// Validate and extract a record from a create/replace request payload.
    ///
    /// Presence is checked before the year type. Presence follows the
    /// catalog's truthiness rule: an absent key, `null`, `""`, `0`, and
    /// `false` all count as missing, for every field (so `year: 0` is a
    /// missing-fields error, not a type error).
    pub fn from_payload(payload: &Value) -> Result<Self, CatalogError> {
        let fields = ["title", "genre", "year", "director"].map(|key| truthy_field(payload, key));
        let [Some(title), Some(genre), Some(year), Some(director)] = fields else {
            return Err(CatalogError::MissingFields);
        };
        let Value::Number(year) = year else {
            return Err(CatalogError::YearNotANumber);
        };
        let year = year
            .as_i64()
            .or_else(|| year.as_f64().map(|value| value as i64))
            .ok_or(CatalogError::YearNotANumber)?;

        Ok(Self {
            title: text_field(title),
            genre: text_field(genre),
            year,
            director: text_field(director),
        })
    }
}

/// Returns the field only when it is present and truthy.
fn truthy_field<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    let value = payload.get(key)?;
    let truthy = match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    truthy.then_some(value)
}

/// The source stored fields untyped, so a truthy non-string value is kept
/// under its JSON rendering rather than rejected.
fn text_field(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
