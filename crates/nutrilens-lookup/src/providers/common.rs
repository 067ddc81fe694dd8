//! Shared JSON accessors for provider parsers.
//!
//! Provider payloads mix numbers and numeric strings for the same fields,
//! so every numeric read goes through one coercion path.

use serde_json::Value;

/// Coerce a JSON value into a float, accepting numeric strings.
pub(crate) fn json_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a numeric field from a JSON object, defaulting to zero.
pub(crate) fn field_f64(object: &Value, key: &str) -> f64 {
    object.get(key).and_then(json_f64).unwrap_or(0.0)
}

/// Read a string field from a JSON object, falling back to a default.
pub(crate) fn field_str_or(object: &Value, key: &str, default: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}
