use crate::config::{KEEP_LINK_RELS, PRUNED_FIELDS, PRUNED_PROPERTIES};
use serde_json::Value;
use tracing::debug;

/// The record identifier, the sole join key between catalogues.
pub fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// Strip the non-semantic parts of a record before comparison: provenance
/// markers, centre-local property hints, and every link whose relation is not
/// on the allow-list. Absent fields are simply left absent.
///
/// Takes the record by value; callers that still need the raw form must clone
/// before normalizing. Idempotent.
pub fn normalize(mut record: Value) -> Value {
    let Some(obj) = record.as_object_mut() else {
        return record;
    };

    for field in PRUNED_FIELDS {
        if obj.remove(*field).is_some() {
            debug!(field, "pruned top-level field");
        }
    }

    if let Some(properties) = obj.get_mut("properties").and_then(Value::as_object_mut) {
        for field in PRUNED_PROPERTIES {
            if properties.remove(*field).is_some() {
                debug!(field, "pruned property");
            }
        }
    }

    if let Some(links) = obj.get_mut("links").and_then(Value::as_array_mut) {
        links.retain(|link| {
            let rel = link.get("rel").and_then(Value::as_str).unwrap_or("");
            let keep = KEEP_LINK_RELS.contains(&rel);
            if !keep {
                debug!(%link, "removed link");
            }
            keep
        });
    }

    record
}
