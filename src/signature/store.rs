//! Signature store: loading and holding the threat database.
//!
//! The store is built once at engine construction and immutable
//! thereafter, so it can be shared across threads behind an `Arc`
//! without further synchronization.
//!
//! Two load disciplines are offered:
//! - [`SignatureStore::from_file`] fails OPEN: a missing or unparsable
//!   database yields an empty store (the gate allows everything) and a
//!   warning on the log side channel. Availability of the wrapped
//!   service wins over defense-in-depth.
//! - [`SignatureStore::from_file_strict`] fails CLOSED: load errors are
//!   returned to the caller, for deployments that refuse to start
//!   without a threat database.

use std::path::Path;

use serde::Deserialize;

use crate::error::{GateError, Result};
use crate::signature::builtin::BUILTIN_SIGNATURES;
use crate::signature::record::{CompiledSignature, ThreatSignature};

/// Top-level signature database document.
#[derive(Debug, Deserialize)]
struct SignatureDocument {
    /// Signature records; individual malformed entries are tolerated
    #[serde(default)]
    threat_signatures: Vec<serde_json::Value>,
}

/// Immutable, ordered collection of compiled threat signatures.
///
/// # Example
/// ```
/// use gate::SignatureStore;
///
/// let json = r#"{"threat_signatures": [
///     {"id": "s1", "category": "test", "patterns": ["foo"], "severity_modifier": 2.0}
/// ]}"#;
///
/// let store = SignatureStore::parse(json).unwrap();
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SignatureStore {
    signatures: Vec<CompiledSignature>,
}

impl SignatureStore {
    /// Create an empty store (matches nothing, gate always allows).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from the built-in default signature set.
    pub fn builtin() -> Self {
        let signatures = BUILTIN_SIGNATURES
            .iter()
            .map(|(id, category, patterns, severity)| {
                CompiledSignature::compile(&ThreatSignature {
                    id: (*id).to_string(),
                    category: (*category).to_string(),
                    patterns: patterns.iter().map(|p| (*p).to_string()).collect(),
                    severity_modifier: *severity,
                })
            })
            .collect();

        Self { signatures }
    }

    /// Parse a signature database document.
    ///
    /// Well-formed records are compiled and kept in source order.
    /// Records that fail to deserialize or are structurally malformed
    /// (no patterns, negative severity) are skipped with a warning so a
    /// single bad entry cannot take the whole database down. An
    /// unparsable document is an error; callers choose between the
    /// fail-open and fail-closed file loaders above this.
    pub fn parse(json: &str) -> Result<Self> {
        let doc: SignatureDocument = serde_json::from_str(json)?;

        let mut signatures = Vec::with_capacity(doc.threat_signatures.len());
        let mut skipped = 0usize;

        for value in doc.threat_signatures {
            match serde_json::from_value::<ThreatSignature>(value) {
                Ok(record) if record.is_well_formed() => {
                    signatures.push(CompiledSignature::compile(&record));
                },
                Ok(record) => {
                    skipped += 1;
                    tracing::warn!(signature = %record.id, "skipping malformed signature record");
                },
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("skipping undecodable signature record: {e}");
                },
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, loaded = signatures.len(), "signature database partially loaded");
        }

        Ok(Self { signatures })
    }

    /// Load a signature database from a JSON file, failing open.
    ///
    /// On a missing file or unparsable document this returns the empty
    /// store and logs a warning: the engine stays usable in a maximally
    /// permissive state rather than refusing to start.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match Self::from_file_strict(path) {
            Ok(store) => {
                tracing::info!(
                    path = %path.display(),
                    signatures = store.len(),
                    "loaded signature database"
                );
                store
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "signature database unavailable, gate is fail-open: {e}"
                );
                Self::empty()
            },
        }
    }

    /// Load a signature database from a JSON file, failing closed.
    ///
    /// Any read or parse failure is returned to the caller.
    pub fn from_file_strict(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GateError::SignatureDb(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::parse(&content)
            .map_err(|e| GateError::SignatureDb(format!("failed to parse {}: {e}", path.display())))
    }

    /// Number of signatures in the store.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether the store holds no signatures.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Iterate signatures in store order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledSignature> {
        self.signatures.iter()
    }

    /// Distinct categories present in the store, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> =
            self.signatures.iter().map(|s| s.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_document() {
        let json = r#"{"threat_signatures": [
            {"id": "s1", "category": "jailbreak", "patterns": ["(?i)dan mode"], "severity_modifier": 3.5},
            {"id": "s2", "category": "override", "patterns": ["(?i)ignore previous"], "severity_modifier": 3.0}
        ]}"#;

        let store = SignatureStore::parse(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.categories(), vec!["jailbreak", "override"]);
    }

    #[test]
    fn test_parse_skips_malformed_records() {
        // second record is missing `patterns`, third has negative severity
        let json = r#"{"threat_signatures": [
            {"id": "ok", "category": "test", "patterns": ["foo"], "severity_modifier": 1.0},
            {"id": "no-patterns", "category": "test", "severity_modifier": 1.0},
            {"id": "bad-severity", "category": "test", "patterns": ["bar"], "severity_modifier": -2.0}
        ]}"#;

        let store = SignatureStore::parse(json).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().unwrap().id, "ok");
    }

    #[test]
    fn test_parse_unparsable_document_is_error() {
        assert!(SignatureStore::parse("not json at all").is_err());
    }

    #[test]
    fn test_parse_missing_signatures_key() {
        let store = SignatureStore::parse("{}").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_file_missing_fails_open() {
        let store = SignatureStore::from_file("/nonexistent/threat_db.json");
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_file_strict_missing_fails_closed() {
        assert!(SignatureStore::from_file_strict("/nonexistent/threat_db.json").is_err());
    }

    #[test]
    fn test_builtin_store_nonempty() {
        let store = SignatureStore::builtin();
        assert!(!store.is_empty());
        assert!(store.categories().contains(&"jailbreak"));
    }

    #[test]
    fn test_store_preserves_source_order() {
        let json = r#"{"threat_signatures": [
            {"id": "b", "category": "t", "patterns": ["x"], "severity_modifier": 1.0},
            {"id": "a", "category": "t", "patterns": ["y"], "severity_modifier": 1.0}
        ]}"#;

        let store = SignatureStore::parse(json).unwrap();
        let ids: Vec<&str> = store.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
