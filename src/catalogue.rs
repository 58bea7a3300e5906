use crate::config::CATALOGUE_SUFFIX;
use crate::record;
use anyhow::{Context, Result, anyhow};
use globset::{Glob, GlobMatcher};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record id → raw record, for one catalogue.
pub type RecordSet = IndexMap<String, Value>;

/// Outcome of directory discovery. `iut` is the directory name of the
/// implementation under test, when one matched the centre id.
#[derive(Debug, Default)]
pub struct Catalogues {
    pub iut: Option<String>,
    pub peers: IndexMap<String, RecordSet>,
}

/// Scan `root` for `*-global-discovery-catalogue` directories and partition
/// them: the first match whose name starts with `centre_id` becomes the
/// implementation under test, the rest become peers with empty record sets.
/// Entries are visited in name order so peer iteration is deterministic.
pub fn discover(root: &Path, centre_id: &str) -> Result<Catalogues> {
    let mut names = Vec::new();
    let entries =
        fs::read_dir(root).with_context(|| format!("scanning {}", root.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(CATALOGUE_SUFFIX) {
            names.push(name);
        }
    }
    names.sort();

    let mut catalogues = Catalogues::default();
    for name in names {
        if name.starts_with(centre_id) {
            if catalogues.iut.is_none() {
                debug!(catalogue = %name, "implementation under test");
                catalogues.iut = Some(name);
            }
        } else {
            debug!(catalogue = %name, "peer");
            catalogues.peers.insert(name, RecordSet::new());
        }
    }
    Ok(catalogues)
}

/// Read every `*.json` file of every peer catalogue and index the parsed
/// records by their `id`. A file that fails to parse, or that carries no
/// string `id`, is a setup defect and aborts the run.
pub fn load_peer_records(root: &Path, peers: &mut IndexMap<String, RecordSet>) -> Result<()> {
    for (name, records) in peers.iter_mut() {
        for path in json_files(&root.join(name))? {
            let raw = read_record(&path)?;
            let id = record::record_id(&raw)
                .ok_or_else(|| anyhow!("{}: record has no string id", path.display()))?
                .to_owned();
            records.insert(id, raw);
        }
    }
    Ok(())
}

static JSON_GLOB: Lazy<GlobMatcher> =
    Lazy::new(|| Glob::new("*.json").expect("literal glob").compile_matcher());

/// The `*.json` files directly inside `dir`, in name order.
pub fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir).with_context(|| format!("scanning {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && JSON_GLOB.is_match(entry.file_name()) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_record(path: &Path) -> Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
