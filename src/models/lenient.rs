//! Field decoders for hand-edited JSON. A `null` or wrongly typed value
//! becomes the field's blank default instead of failing the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings pass through, numbers and booleans are stringified, anything else is blank.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Like [`string`], but blank values stay `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).filter(|s| !s.is_empty()))
}

/// An array of scalars. Non-array values read as empty; nested arrays,
/// objects and nulls inside it are skipped.
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().filter_map(scalar_text).collect()),
        _ => Ok(vec![]),
    }
}

/// Any JSON number (or numeric string), truncated and clamped to `u32`.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(match n {
        Some(n) if n.is_finite() && n > 0.0 => n.min(u32::MAX as f64) as u32,
        _ => 0,
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
