//! Analysis statistics derived from the audit history.

use serde::Serialize;

use crate::analyzer::history::HistoryEntry;
use crate::analyzer::types::PolicyAction;

/// Aggregate statistics over all analyses performed by one analyzer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GateStats {
    /// Total number of analyses performed.
    pub total_analyses: usize,
    /// Analyses that resulted in ALLOW.
    pub allows: usize,
    /// Analyses that resulted in WARN.
    pub warns: usize,
    /// Analyses that resulted in BLOCK.
    pub blocks: usize,
    /// Analyses that resulted in REVIEW (reserved, currently always 0).
    pub reviews: usize,
    /// Mean severity score across all analyses (0.0 when none).
    pub avg_severity: f64,
}

impl GateStats {
    /// Compute statistics from a history snapshot.
    ///
    /// An empty history yields the zero-valued default; there is no
    /// division by zero.
    pub fn from_history(entries: &[HistoryEntry]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let mut stats = Self {
            total_analyses: entries.len(),
            ..Self::default()
        };

        let mut severity_sum = 0.0;
        for entry in entries {
            match entry.action {
                PolicyAction::Allow => stats.allows += 1,
                PolicyAction::Warn => stats.warns += 1,
                PolicyAction::Block => stats.blocks += 1,
                PolicyAction::Review => stats.reviews += 1,
            }
            severity_sum += entry.severity_score;
        }

        stats.avg_severity = severity_sum / entries.len() as f64;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let stats = GateStats::from_history(&[]);
        assert_eq!(stats.total_analyses, 0);
        assert_eq!(stats.avg_severity, 0.0);
    }

    #[test]
    fn test_counts_and_mean() {
        let entries = vec![
            HistoryEntry::new("u", PolicyAction::Allow, 0.0, "a"),
            HistoryEntry::new("u", PolicyAction::Warn, 2.0, "b"),
            HistoryEntry::new("u", PolicyAction::Block, 4.0, "c"),
        ];

        let stats = GateStats::from_history(&entries);
        assert_eq!(stats.total_analyses, 3);
        assert_eq!(stats.allows, 1);
        assert_eq!(stats.warns, 1);
        assert_eq!(stats.blocks, 1);
        assert_eq!(stats.reviews, 0);
        assert!((stats.avg_severity - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_action_counts_sum_to_total() {
        let entries = vec![
            HistoryEntry::new("u", PolicyAction::Allow, 0.0, "a"),
            HistoryEntry::new("u", PolicyAction::Allow, 1.0, "b"),
            HistoryEntry::new("u", PolicyAction::Block, 5.0, "c"),
        ];

        let stats = GateStats::from_history(&entries);
        assert_eq!(
            stats.allows + stats.warns + stats.blocks + stats.reviews,
            stats.total_analyses
        );
    }
}
