//! JSON output formatting.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::Result;

/// Pretty-print with keys in sorted order at every level.
pub fn render(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&sort_keys(value.clone()))?)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            Value::Object(sorted.into_iter().collect::<Map<String, Value>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Add an `"as": <handle>` field to object output. Other shapes are left as is.
pub fn with_handle(value: Value, handle: &str) -> Value {
    match value {
        Value::Object(mut map) => {
            map.insert("as".to_string(), Value::String(handle.to_string()));
            Value::Object(map)
        }
        other => other,
    }
}
