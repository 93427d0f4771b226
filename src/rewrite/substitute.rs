//! Recursive substring replacement over JSON values
//!
//! Only string leaves are rewritten. Object keys, numbers, booleans and null pass
//! through unchanged, and containers keep their length and key order. Replacement
//! uses [`str::replace`] semantics: literal, non-overlapping, leftmost first.

use serde_json::{Map, Value};

/// Rebuild `value` with every occurrence of `from` in string leaves replaced by `to`
pub fn recursive_replace(value: Value, from: &str, to: &str) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, child)| (key, recursive_replace(child, from, to)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| recursive_replace(item, from, to))
                .collect(),
        ),
        Value::String(s) => Value::String(s.replace(from, to)),
        other => other,
    }
}

/// Count non-overlapping occurrences of `from` across all string leaves
pub fn count_occurrences(value: &Value, from: &str) -> usize {
    match value {
        Value::Object(map) => map.values().map(|v| count_occurrences(v, from)).sum(),
        Value::Array(items) => items.iter().map(|v| count_occurrences(v, from)).sum(),
        Value::String(s) => s.matches(from).count(),
        _ => 0,
    }
}
