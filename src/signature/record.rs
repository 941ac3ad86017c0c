//! Threat signature data structures.
//!
//! This module defines the core types for the signature database:
//! - `ThreatSignature`: the wire-format record as it appears in the
//!   JSON database
//! - `CompiledSignature`: the load-time compiled form with ready-to-run
//!   regexes
//!
//! A signature matches when ANY of its patterns matches the input text
//! (logical OR). Each matching pattern contributes the signature's
//! `severity_modifier` to the running score.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A threat signature record as stored in the signature database.
///
/// This is the deserialization target for entries in the
/// `threat_signatures` array of the database document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatSignature {
    /// Unique signature identifier (e.g. `"jb-dan-001"`)
    pub id: String,

    /// Category label grouping related signatures (e.g. `"jailbreak"`)
    pub category: String,

    /// Regex pattern strings; the signature matches if any pattern matches
    pub patterns: Vec<String>,

    /// Non-negative score contribution per matching pattern
    pub severity_modifier: f64,
}

impl ThreatSignature {
    /// Check structural validity of a record.
    ///
    /// A record is well-formed when it has at least one pattern and a
    /// non-negative, finite severity modifier. Malformed records are
    /// skipped at load time.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
            && !self.patterns.is_empty()
            && self.severity_modifier >= 0.0
            && self.severity_modifier.is_finite()
    }
}

/// A signature compiled for matching.
///
/// Patterns that fail to compile are dropped here, once, at load time.
/// A dropped pattern never matches and never aborts an analysis, which
/// is the same observable behavior as skipping it on every call.
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    /// Unique signature identifier
    pub id: String,

    /// Category label
    pub category: String,

    /// Compiled patterns (invalid ones already removed)
    pub patterns: Vec<Regex>,

    /// Score contribution per matching pattern
    pub severity_modifier: f64,
}

impl CompiledSignature {
    /// Compile a wire record into a matchable signature.
    ///
    /// Invalid regex patterns are skipped with a warning. A signature
    /// whose every pattern is invalid is still kept; it simply never
    /// matches.
    pub fn compile(record: &ThreatSignature) -> Self {
        let patterns = record
            .patterns
            .iter()
            .filter_map(|p| match Regex::new(p) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(
                        signature = %record.id,
                        pattern = %p,
                        "skipping invalid pattern: {e}"
                    );
                    None
                },
            })
            .collect();

        Self {
            id: record.id.clone(),
            category: record.category.clone(),
            patterns,
            severity_modifier: record.severity_modifier,
        }
    }
}
