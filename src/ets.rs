//! Executable test suite for the structural core of WCMP2.
//!
//! Each check mirrors a requirement of the WMO Core Metadata Profile 2
//! specification; the suite stops at the first failing check and surfaces its
//! name and reason verbatim. Records are expected to be normalized before
//! they are submitted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Conformance class every WCMP2 record must declare.
pub const WCMP2_CORE_CONFORMANCE: &str = "http://wis.wmo.int/spec/wcmp/2/conf/core";

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^urn:wmo:md:[a-z0-9-]+:[A-Za-z0-9_./-]+$").expect("literal pattern")
});

const DATA_POLICIES: &[&str] = &["core", "recommended"];

#[derive(Debug, Error)]
#[error("{test}: {reason}")]
pub struct EtsError {
    test: &'static str,
    reason: String,
}

impl EtsError {
    fn new(test: &'static str, reason: impl Into<String>) -> Self {
        Self {
            test,
            reason: reason.into(),
        }
    }

    /// Name of the failed test.
    pub fn test(&self) -> &'static str {
        self.test
    }
}

/// Test suite over a single record. Borrows the record so the caller can keep
/// using it for comparison after the tests pass.
pub struct TestSuite<'a> {
    record: &'a Value,
}

impl<'a> TestSuite<'a> {
    pub fn new(record: &'a Value) -> Self {
        Self { record }
    }

    /// Run every check in order, failing on the first violation.
    pub fn run_tests(&self) -> Result<(), EtsError> {
        self.test_record_type()?;
        self.test_identifier()?;
        self.test_conformance()?;
        self.test_properties()?;
        self.test_data_policy()?;
        self.test_links()?;
        Ok(())
    }

    fn test_record_type(&self) -> Result<(), EtsError> {
        const TEST: &str = "record-type";
        if !self.record.is_object() {
            return Err(EtsError::new(TEST, "record is not a JSON object"));
        }
        match self.record.get("type").and_then(Value::as_str) {
            Some("Feature") => Ok(()),
            Some(other) => Err(EtsError::new(
                TEST,
                format!("type is {other:?}, expected \"Feature\""),
            )),
            None => Err(EtsError::new(TEST, "missing type")),
        }
    }

    fn test_identifier(&self) -> Result<(), EtsError> {
        const TEST: &str = "identifier";
        let Some(id) = self.record.get("id").and_then(Value::as_str) else {
            return Err(EtsError::new(TEST, "missing string id"));
        };
        if !IDENTIFIER.is_match(id) {
            return Err(EtsError::new(
                TEST,
                format!("id {id:?} does not match urn:wmo:md:<centre-id>:<local-id>"),
            ));
        }
        Ok(())
    }

    fn test_conformance(&self) -> Result<(), EtsError> {
        const TEST: &str = "conformance";
        let Some(classes) = self.record.get("conformsTo").and_then(Value::as_array) else {
            return Err(EtsError::new(TEST, "missing conformsTo array"));
        };
        let declared = classes
            .iter()
            .filter_map(Value::as_str)
            .any(|class| class == WCMP2_CORE_CONFORMANCE);
        if !declared {
            return Err(EtsError::new(
                TEST,
                format!("conformsTo does not declare {WCMP2_CORE_CONFORMANCE}"),
            ));
        }
        Ok(())
    }

    fn test_properties(&self) -> Result<(), EtsError> {
        const TEST: &str = "properties";
        let Some(properties) = self.record.get("properties").and_then(Value::as_object) else {
            return Err(EtsError::new(TEST, "missing properties object"));
        };
        match properties.get("title").and_then(Value::as_str) {
            Some(title) if !title.trim().is_empty() => Ok(()),
            Some(_) => Err(EtsError::new(TEST, "title is empty")),
            None => Err(EtsError::new(TEST, "missing string title")),
        }
    }

    fn test_data_policy(&self) -> Result<(), EtsError> {
        const TEST: &str = "data-policy";
        let policy = self
            .record
            .get("properties")
            .and_then(|properties| properties.get("wmo:dataPolicy"));
        match policy {
            None => Ok(()),
            Some(Value::String(policy)) if DATA_POLICIES.contains(&policy.as_str()) => Ok(()),
            Some(other) => Err(EtsError::new(
                TEST,
                format!("wmo:dataPolicy {other} is not one of core, recommended"),
            )),
        }
    }

    fn test_links(&self) -> Result<(), EtsError> {
        const TEST: &str = "links";
        let Some(links) = self.record.get("links").and_then(Value::as_array) else {
            return Err(EtsError::new(TEST, "missing links array"));
        };
        for (index, link) in links.iter().enumerate() {
            if link.get("href").and_then(Value::as_str).is_none() {
                return Err(EtsError::new(TEST, format!("link {index} has no href")));
            }
            if link.get("rel").and_then(Value::as_str).is_none() {
                return Err(EtsError::new(TEST, format!("link {index} has no rel")));
            }
        }
        Ok(())
    }
}
