//! Human-readable rendering of analysis results.
//!
//! The exact wording is presentation-layer and not load-bearing; the
//! contract is determinism. Two identical results render to identical
//! strings (categories are already sorted in the result, pattern ids
//! keep encounter order).

use crate::analyzer::AnalysisResult;

/// Render an analysis result as a deterministic multi-line report.
///
/// Includes the action, confidence as a percentage, severity score,
/// matched categories, matched pattern ids, and the reason string.
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Action:     {}\n", result.action.to_string().to_uppercase()));
    out.push_str(&format!("Confidence: {:.1}%\n", result.confidence * 100.0));
    out.push_str(&format!("Severity:   {:.2}/10.0\n", result.severity_score));

    if !result.threat_categories.is_empty() {
        out.push_str("Categories:\n");
        for category in &result.threat_categories {
            out.push_str(&format!("  - {category}\n"));
        }
    }

    if !result.matched_patterns.is_empty() {
        out.push_str("Matched signatures:\n");
        for id in &result.matched_patterns {
            out.push_str(&format!("  - {id}\n"));
        }
    }

    out.push_str(&format!("Reason:     {}\n", result.reason));
    out
}
