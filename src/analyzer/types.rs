//! Analysis request and result types.
//!
//! Policy actions and context tags are closed enums so exhaustiveness
//! is checked at compile time; new taxonomy entries are additive,
//! deliberate changes.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Policy decision gating whether text proceeds downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    /// Text may proceed unmodified.
    Allow,
    /// Text may proceed; caller should surface a caution.
    Warn,
    /// Text must not reach the downstream model.
    Block,
    /// Reserved: escalate to human review. Never produced by the
    /// current threshold function; kept in the taxonomy for callers
    /// that persist or switch on actions.
    Review,
}

impl std::fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyAction::Allow => write!(f, "allow"),
            PolicyAction::Warn => write!(f, "warn"),
            PolicyAction::Block => write!(f, "block"),
            PolicyAction::Review => write!(f, "review"),
        }
    }
}

/// Context tag supplied with an analysis request.
///
/// Accepted as input but does not currently alter matching or
/// thresholds; reserved for per-context policy differentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    /// General-purpose conversation (default)
    #[default]
    General,
    /// Creative writing
    Creative,
    /// Technical / programming
    Technical,
    /// Educational
    Educational,
}

impl FromStr for ContextType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(ContextType::General),
            "creative" => Ok(ContextType::Creative),
            "technical" => Ok(ContextType::Technical),
            "educational" => Ok(ContextType::Educational),
            other => Err(format!(
                "unknown context: {other}. Use: general, creative, technical, educational"
            )),
        }
    }
}

/// A single analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Opaque caller-supplied user identifier (not validated here)
    pub user_id: String,

    /// Text to analyze
    pub text: String,

    /// Request context tag
    #[serde(default)]
    pub context: ContextType,
}

impl AnalysisRequest {
    /// Create a request with the default (general) context.
    pub fn new(user_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            text: text.into(),
            context: ContextType::General,
        }
    }

    /// Set the context tag.
    pub fn with_context(mut self, context: ContextType) -> Self {
        self.context = context;
        self
    }
}

/// Immutable snapshot of one threat analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Policy decision
    pub action: PolicyAction,

    /// Confidence in the decision, 0.0 - 1.0
    pub confidence: f64,

    /// Matched signature categories, in sorted order
    pub threat_categories: BTreeSet<String>,

    /// Matched signature ids in encounter order, truncated to the
    /// first 5 for display; the match count in `reason` is computed
    /// from the untruncated list
    pub matched_patterns: Vec<String>,

    /// Human-readable summary
    pub reason: String,

    /// Aggregate severity, capped at 10.0
    pub severity_score: f64,
}

impl AnalysisResult {
    /// Whether the analyzed text may proceed downstream.
    pub fn is_safe(&self) -> bool {
        matches!(self.action, PolicyAction::Allow | PolicyAction::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(PolicyAction::Allow.to_string(), "allow");
        assert_eq!(PolicyAction::Block.to_string(), "block");
    }

    #[test]
    fn test_action_serde_roundtrip() {
        let json = serde_json::to_string(&PolicyAction::Review).unwrap();
        assert_eq!(json, "\"review\"");
        let back: PolicyAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PolicyAction::Review);
    }

    #[test]
    fn test_context_from_str() {
        assert_eq!("creative".parse::<ContextType>().unwrap(), ContextType::Creative);
        assert_eq!("TECHNICAL".parse::<ContextType>().unwrap(), ContextType::Technical);
        assert!("other".parse::<ContextType>().is_err());
    }

    #[test]
    fn test_request_builder() {
        let req = AnalysisRequest::new("u1", "hello").with_context(ContextType::Educational);
        assert_eq!(req.user_id, "u1");
        assert_eq!(req.context, ContextType::Educational);
    }

    #[test]
    fn test_request_context_defaults_in_serde() {
        let req: AnalysisRequest =
            serde_json::from_str(r#"{"user_id": "u1", "text": "hi"}"#).unwrap();
        assert_eq!(req.context, ContextType::General);
    }
}
