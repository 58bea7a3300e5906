use std::path::PathBuf;

pub const CATALOGUE_SUFFIX: &str = "-global-discovery-catalogue";

/// Link relations that survive normalization. Retaining `mqtt`-scheme links is
/// a possible future extension; current behaviour is license-only.
pub const KEEP_LINK_RELS: &[&str] = &["license"];

/// Top-level provenance fields pruned before comparison.
pub const PRUNED_FIELDS: &[&str] = &["generated_by"];

/// `properties` entries pruned before comparison. Both are centre-local
/// administrative hints, not part of the shared record semantics.
pub const PRUNED_PROPERTIES: &[&str] = &["wmo:topicHierarchy", "centre-id"];

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory scanned for `*-global-discovery-catalogue` entries.
    pub root: PathBuf,
    /// Centre id prefix naming the implementation under test.
    pub centre_id: String,
    /// Emit diffs on a single line instead of pretty-printed.
    pub compact: bool,
}
