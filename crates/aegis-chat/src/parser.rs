//! Utterance parsing: escalation detection and identifier extraction.
//!
//! Classifies each turn into one of four intents by checking, in order:
//! escalation trigger phrases, a claim number, a policy number, and finally
//! the FAQ fallback. Ordering is behavior, not an implementation detail.

use regex::Regex;
use std::sync::LazyLock;

/// Phrases that immediately route a turn to a human.
///
/// Matched as substrings of the lower-cased utterance, not whole words:
/// "unhappy" inside a longer word still triggers.
pub const ESCALATION_TRIGGERS: &[&str] = &[
    "speak to human",
    "talk to agent",
    "representative",
    "manager",
    "complaint",
    "lawsuit",
    "lawyer",
    "attorney",
    "fraud",
    "dissatisfied",
    "unhappy",
    "unacceptable",
];

static CLAIM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)clm[-\s]?(\d{4})[-\s]?(\d{4})").expect("claim regex"));

static POLICY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pol[-\s]?(\d{4})[-\s]?(\d{3})").expect("policy regex"));

/// The intent resolved for one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A trigger phrase matched; hand off to a human.
    Escalation,
    /// A claim number was present (normalized form).
    ClaimLookup(String),
    /// A policy number was present (normalized form).
    PolicyLookup(String),
    /// Nothing matched; fall through to FAQ scoring.
    Faq,
}

/// Resolve the intent for a lower-cased utterance.
///
/// Short-circuits on the first match; escalation always wins over any
/// claim or policy number also present in the text.
pub fn classify(lower: &str) -> Intent {
    if should_escalate(lower) {
        return Intent::Escalation;
    }
    if let Some(claim_number) = extract_claim_number(lower) {
        return Intent::ClaimLookup(claim_number);
    }
    if let Some(policy_number) = extract_policy_number(lower) {
        return Intent::PolicyLookup(policy_number);
    }
    Intent::Faq
}

/// Check whether any escalation trigger phrase occurs in the text.
pub fn should_escalate(lower: &str) -> bool {
    ESCALATION_TRIGGERS
        .iter()
        .any(|trigger| lower.contains(trigger))
}

/// Extract and normalize a claim number (`CLM-NNNN-NNNN`).
///
/// Accepts hyphen, space, or no separator between groups; the result is
/// rebuilt from the digit groups so every variant normalizes identically.
pub fn extract_claim_number(text: &str) -> Option<String> {
    CLAIM_RE
        .captures(text)
        .map(|caps| format!("CLM-{}-{}", &caps[1], &caps[2]))
}

/// Extract and normalize a policy number (`POL-NNNN-NNN`).
pub fn extract_policy_number(text: &str) -> Option<String> {
    POLICY_RE
        .captures(text)
        .map(|caps| format!("POL-{}-{}", &caps[1], &caps[2]))
}

// =============================================================================
// Tests
// =============================================================================
