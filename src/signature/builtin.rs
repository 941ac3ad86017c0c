//! Built-in signature definitions.
//!
//! This module contains a compile-time default signature set covering
//! the most common adversarial phrasings seen against conversational
//! models. It is an explicit opt-in via [`super::SignatureStore::builtin`];
//! the file-loading path never falls back to it, so a missing database
//! still means a maximally permissive empty store.
//!
//! Covered families:
//! - Instruction override ("ignore previous instructions", ...)
//! - Jailbreak personas (DAN mode, developer mode, ...)
//! - Role manipulation ("pretend you are an unrestricted AI", ...)
//! - System prompt extraction
//!
//! Severity modifiers are scaled against the engine's thresholds
//! (WARN at 1.5, BLOCK at 3.0): a single high-confidence jailbreak
//! signature is enough to block on its own, while weaker signals need
//! to co-occur.

/// Built-in signature definition tuple: (id, category, patterns, severity_modifier)
pub type BuiltinSignature = (&'static str, &'static str, &'static [&'static str], f64);

/// All built-in signature definitions
///
/// Signatures are organized by threat family. Order matters: it is the
/// store order, and therefore the match-reporting order.
pub static BUILTIN_SIGNATURES: &[BuiltinSignature] = &[
    // ============================================================
    // Instruction override
    // ============================================================
    (
        "ov-ignore-001",
        "override",
        &[
            r"(?i)ignore\s+(all\s+)?(previous|prior|above)\s+(instructions?|prompts?|rules?)",
            r"(?i)disregard\s+(all\s+)?(previous|prior|above)\s+(instructions?|prompts?)",
        ],
        3.0,
    ),
    (
        "ov-forget-002",
        "override",
        &[r"(?i)forget\s+(your|all|previous)\s+(instructions?|rules?|training)"],
        2.5,
    ),
    (
        "ov-newrules-003",
        "override",
        &[r"(?i)your\s+new\s+(instructions?|rules?|role)\s+(are|is|:)"],
        2.5,
    ),
    // ============================================================
    // Jailbreak personas
    // ============================================================
    (
        "jb-dan-001",
        "jailbreak",
        &[
            r"(?i)(enable\s+)?dan\s+mode",
            r"(?i)do\s+anything\s+now",
        ],
        3.5,
    ),
    (
        "jb-devmode-002",
        "jailbreak",
        &[r"(?i)(enter|enable|activate)\s+(developer|dev)\s+mode"],
        3.0,
    ),
    (
        "jb-explicit-003",
        "jailbreak",
        &[r"(?i)jail\s*break"],
        2.0,
    ),
    (
        "jb-bypass-004",
        "jailbreak",
        &[r"(?i)bypass\s+(safety|content|ethical|security)\s+(filters?|restrictions?|guidelines?)"],
        3.0,
    ),
    // ============================================================
    // Role manipulation
    // ============================================================
    (
        "rm-unrestricted-001",
        "role_manipulation",
        &[
            r"(?i)(pretend|act|behave)\s+(you('| a)?re|as\s+if|like)\s+.{0,40}(unrestricted|unfiltered|uncensored)",
            r"(?i)(unrestricted|unfiltered|uncensored)\s+(mode|ai|assistant)",
        ],
        2.5,
    ),
    (
        "rm-nolimits-002",
        "role_manipulation",
        &[r"(?i)(no|without|remove)\s+(limits?|restrictions?|boundaries|guidelines?)"],
        1.0,
    ),
    (
        "rm-roleplay-003",
        "role_manipulation",
        &[r"(?i)you\s+are\s+(now|actually)\s+(a|an|the)\s+"],
        1.0,
    ),
    // ============================================================
    // System prompt extraction
    // ============================================================
    (
        "ex-sysprompt-001",
        "extraction",
        &[r"(?i)(show|reveal|print|output|repeat|display)\s+(your\s+)?(system\s+)?(prompt|instructions?)"],
        2.0,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique() {
        let mut ids: Vec<&str> = BUILTIN_SIGNATURES.iter().map(|(id, ..)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), BUILTIN_SIGNATURES.len());
    }

    #[test]
    fn test_builtin_patterns_compile() {
        for (id, _, patterns, _) in BUILTIN_SIGNATURES {
            assert!(!patterns.is_empty(), "{id} has no patterns");
            for pattern in *patterns {
                assert!(
                    regex::Regex::new(pattern).is_ok(),
                    "{id} pattern does not compile: {pattern}"
                );
            }
        }
    }

    #[test]
    fn test_builtin_severities_in_range() {
        for (id, _, _, severity) in BUILTIN_SIGNATURES {
            assert!(
                *severity >= 0.0 && *severity <= 10.0,
                "{id} severity out of range: {severity}"
            );
        }
    }
}
