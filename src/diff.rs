//! Structural diff between two JSON values.
//!
//! Objects are compared key by key and recursed into; arrays and scalars are
//! compared wholesale. Divergent paths are reported dotted from the root
//! (`properties.title`), each exactly once.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct Change {
    pub from: Value,
    pub to: Value,
}

/// A non-empty `Diff` means the two values diverge. Serializes to the report
/// shape printed by the checker.
#[derive(Debug, Default, Serialize)]
pub struct Diff {
    /// Paths present only in the right value.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub added: IndexMap<String, Value>,
    /// Paths present only in the left value.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub removed: IndexMap<String, Value>,
    /// Paths present in both with differing values.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub changed: IndexMap<String, Change>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

pub fn diff(left: &Value, right: &Value) -> Diff {
    let mut out = Diff::default();
    walk(left, right, "", &mut out);
    out
}

fn walk(left: &Value, right: &Value, path: &str, out: &mut Diff) {
    match (left, right) {
        (Value::Object(left_map), Value::Object(right_map)) => {
            for (key, left_value) in left_map {
                let child = join(path, key);
                match right_map.get(key) {
                    Some(right_value) => walk(left_value, right_value, &child, out),
                    None => {
                        out.removed.insert(child, left_value.clone());
                    }
                }
            }
            for (key, right_value) in right_map {
                if !left_map.contains_key(key) {
                    out.added.insert(join(path, key), right_value.clone());
                }
            }
        }
        _ if left != right => {
            out.changed.insert(
                path.to_owned(),
                Change {
                    from: left.clone(),
                    to: right.clone(),
                },
            );
        }
        _ => {}
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}
