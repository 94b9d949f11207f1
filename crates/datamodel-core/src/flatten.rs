//! Flatten a nested value into an ordered list of path→scalar pairs.
//!
//! Object keys and 0-based array indices are joined with `.` into a path
//! string; each scalar leaf (including null) emits one `(path, scalar)`
//! pair. The output order is the tree's own order — object insertion order,
//! then array position — which downstream tabular writers map directly onto
//! column order.
//!
//! A bare scalar flattens to a single pair with the empty path. Empty
//! objects and arrays have no leaves and contribute nothing.

use serde_json::Value;

/// Flatten a value into `(path, scalar)` pairs in document order.
pub fn flatten(value: &Value) -> Vec<(String, Value)> {
    let mut pairs = Vec::new();
    fill_pairs(value, String::new(), &mut pairs);
    pairs
}

fn fill_pairs(value: &Value, path: String, pairs: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                fill_pairs(child, join_path(&path, key), pairs);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                fill_pairs(child, join_path(&path, &index.to_string()), pairs);
            }
        }
        scalar => pairs.push((path, scalar.clone())),
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
