#![allow(dead_code)]

use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A valid WCMP2 record carrying every field normalization prunes: a
/// provenance marker, centre-local properties, and non-license links.
pub fn wcmp2_record(centre: &str, local: &str) -> Value {
    json!({
        "id": format!("urn:wmo:md:{centre}:{local}"),
        "type": "Feature",
        "conformsTo": ["http://wis.wmo.int/spec/wcmp/2/conf/core"],
        "generated_by": "pygeometa 0.16",
        "geometry": null,
        "properties": {
            "title": "Hourly surface observations",
            "wmo:dataPolicy": "core",
            "wmo:topicHierarchy": format!("origin/a/wis2/{centre}/data/core"),
            "centre-id": centre,
        },
        "links": [
            {"rel": "license", "href": "https://example.org/licence.txt"},
            {"rel": "item", "href": "https://example.org/items/1"},
            {"rel": "data", "href": "mqtt://broker.example.org", "type": "application/json"},
        ],
    })
}

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create (if needed) and return `<centre>-global-discovery-catalogue`.
    pub fn catalogue(&self, centre: &str) -> PathBuf {
        let dir = self
            .dir
            .path()
            .join(format!("{centre}-global-discovery-catalogue"));
        fs::create_dir_all(&dir).expect("create catalogue dir");
        dir
    }

    pub fn write_record(&self, centre: &str, file_name: &str, record: &Value) -> PathBuf {
        let path = self.catalogue(centre).join(file_name);
        fs::write(
            &path,
            serde_json::to_string_pretty(record).expect("serialize record"),
        )
        .expect("write record");
        path
    }
}
