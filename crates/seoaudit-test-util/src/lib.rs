//! Shared test utilities for the seoaudit workspace.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced with `"__VERSION__"` only when the *root* object looks like a
/// report envelope (`schema`, `tool`, `source` and `result` all present). Timestamp keys
/// (`started_at`, `finished_at`) are normalized at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("source")
            && obj.contains_key("result");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(v) = map.get_mut(key) {
                    *v = Value::String("__TIMESTAMP__".to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
