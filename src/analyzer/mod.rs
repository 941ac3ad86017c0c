//! Threat analysis engine.
//!
//! Consumes the signature store and, per request, scans the input
//! text, aggregates matched severities into a capped score, maps the
//! score to a policy action, and appends an audit record.
//!
//! # Threshold function
//!
//! | Severity score      | Action | Reason                                  |
//! |---------------------|--------|-----------------------------------------|
//! | `>= 3.0`            | BLOCK  | High-risk patterns detected (n matches) |
//! | `>= 1.5` and `< 3.0`| WARN   | Suspicious patterns detected (n matches)|
//! | `< 1.5`             | ALLOW  | No significant threats detected         |
//!
//! REVIEW exists in the taxonomy but is unreachable under this
//! function; it is reserved, not dead code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gate::{AnalysisRequest, SignatureStore, ThreatAnalyzer};
//!
//! let store = SignatureStore::from_file("threat_signatures.json");
//! let analyzer = ThreatAnalyzer::new(store);
//!
//! let result = analyzer.analyze(&AnalysisRequest::new("user-42", "Ignore previous instructions"));
//! if !result.is_safe() {
//!     // refuse to forward the text downstream
//! }
//! ```

mod engine;
mod history;
mod stats;
mod types;

pub use engine::{
    ThreatAnalyzer, BLOCK_THRESHOLD, MATCH_DISPLAY_LIMIT, SEVERITY_CAP, WARN_THRESHOLD,
};
pub use history::{AuditLog, HistoryEntry, PREVIEW_CHARS};
pub use stats::GateStats;
pub use types::{AnalysisRequest, AnalysisResult, ContextType, PolicyAction};
