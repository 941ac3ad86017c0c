//! Signature database loading tests against real files.
//!
//! Verifies the fail-open and fail-closed load disciplines and the
//! per-record tolerance guarantees using temporary files on disk.

use std::io::Write;

use gate::{GateError, SignatureStore};

fn write_db(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_valid_database() {
    let db = write_db(
        r#"{"threat_signatures": [
            {"id": "s1", "category": "jailbreak", "patterns": ["(?i)dan mode"], "severity_modifier": 3.5},
            {"id": "s2", "category": "override", "patterns": ["(?i)ignore previous"], "severity_modifier": 3.0}
        ]}"#,
    );

    let store = SignatureStore::from_file_strict(db.path()).unwrap();
    assert_eq!(store.len(), 2);

    // Fail-open loader sees the same content
    let store = SignatureStore::from_file(db.path());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_missing_file_fail_open_vs_strict() {
    let store = SignatureStore::from_file("/nonexistent/threat_signatures.json");
    assert!(store.is_empty());

    let err = SignatureStore::from_file_strict("/nonexistent/threat_signatures.json").unwrap_err();
    assert!(matches!(err, GateError::SignatureDb(_)));
}

#[test]
fn test_unparsable_document_fail_open_vs_strict() {
    let db = write_db("{ this is not json");

    let store = SignatureStore::from_file(db.path());
    assert!(store.is_empty());

    assert!(SignatureStore::from_file_strict(db.path()).is_err());
}

#[test]
fn test_malformed_records_are_skipped_not_fatal() {
    // wrong type, missing fields, empty patterns, negative severity:
    // each is dropped individually, the good record survives
    let db = write_db(
        r#"{"threat_signatures": [
            "not an object",
            {"id": "missing-patterns", "category": "t", "severity_modifier": 1.0},
            {"id": "empty-patterns", "category": "t", "patterns": [], "severity_modifier": 1.0},
            {"id": "negative", "category": "t", "patterns": ["x"], "severity_modifier": -1.0},
            {"id": "good", "category": "t", "patterns": ["(?i)threat"], "severity_modifier": 2.0}
        ]}"#,
    );

    let store = SignatureStore::from_file_strict(db.path()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.iter().next().unwrap().id, "good");
}

#[test]
fn test_invalid_regex_pattern_dropped_signature_kept() {
    let db = write_db(
        r#"{"threat_signatures": [
            {"id": "mixed", "category": "t", "patterns": ["[unclosed", "valid"], "severity_modifier": 1.0}
        ]}"#,
    );

    let store = SignatureStore::from_file_strict(db.path()).unwrap();
    assert_eq!(store.len(), 1);

    let sig = store.iter().next().unwrap();
    assert_eq!(sig.patterns.len(), 1);
    assert!(sig.patterns[0].is_match("a valid one"));
}

#[test]
fn test_empty_signature_array() {
    let db = write_db(r#"{"threat_signatures": []}"#);
    let store = SignatureStore::from_file_strict(db.path()).unwrap();
    assert!(store.is_empty());
    assert!(store.categories().is_empty());
}

#[test]
fn test_unknown_top_level_keys_ignored() {
    let db = write_db(
        r#"{
            "version": "2.1",
            "updated": "2025-11-03",
            "threat_signatures": [
                {"id": "s1", "category": "t", "patterns": ["x"], "severity_modifier": 1.0}
            ]
        }"#,
    );

    let store = SignatureStore::from_file_strict(db.path()).unwrap();
    assert_eq!(store.len(), 1);
}
