//! `serde_json::Value` <-> [`Value`] conversion utilities

use crate::Value;

/// Convert serde_json::Value to Value.
///
/// Integers that fit `i64` become `Integer`, larger positive integers become
/// `Unsigned`, every other number becomes `Float`.
pub fn from_json(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::Unsigned(u)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(from_json).collect()),
        serde_json::Value::Object(obj) => {
            Value::Object(obj.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        }
    }
}

/// Convert Value to serde_json::Value.
///
/// Returns `None` when `v` is a sentinel. Sentinels nested inside arrays and
/// objects are dropped, matching the "nothing assigned" meaning of `Absent`.
/// Non-finite floats become `null`.
pub fn to_json(v: &Value) -> Option<serde_json::Value> {
    let json = match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Unsigned(u) => serde_json::Value::Number((*u).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().filter_map(to_json).collect()),
        Value::Object(obj) => serde_json::Value::Object(
            obj.iter()
                .filter_map(|(k, v)| to_json(v).map(|v| (k.clone(), v)))
                .collect(),
        ),
        Value::Absent | Value::Delete => return None,
    };
    Some(json)
}
