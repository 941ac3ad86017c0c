//! Append-only analysis audit history.
//!
//! The audit log is an explicitly owned component injected into the
//! analyzer at construction, not a process-wide singleton; each
//! analyzer instance owns exactly one log, which keeps tests isolated.
//!
//! The log grows unbounded for the process lifetime; deployments that
//! need eviction should snapshot and rotate externally.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzer::types::PolicyAction;

/// Number of text characters preserved in each audit entry.
pub const PREVIEW_CHARS: usize = 100;

/// One audit record per completed analysis.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// Wall-clock time of the analysis call
    pub timestamp: DateTime<Utc>,

    /// Caller-supplied user identifier
    pub user_id: String,

    /// Policy decision taken
    pub action: PolicyAction,

    /// Capped severity score
    pub severity_score: f64,

    /// First [`PREVIEW_CHARS`] characters of the analyzed text
    pub text_preview: String,
}

impl HistoryEntry {
    /// Build an entry, truncating the text preview on a char boundary.
    pub fn new(user_id: &str, action: PolicyAction, severity_score: f64, text: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            user_id: user_id.to_string(),
            action,
            severity_score,
            text_preview: text.chars().take(PREVIEW_CHARS).collect(),
        }
    }
}

/// Thread-safe append-only audit log.
///
/// Appends are serialized by a mutex, so entries reflect
/// call-completion order when multiple callers analyze in parallel.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl AuditLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&self, entry: HistoryEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone out the current entries for inspection.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}
