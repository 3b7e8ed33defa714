//! Response templates for every intent.
//!
//! All reply text is deterministic string assembly: status-code phrase maps,
//! conditional detail lines, and fixed fallback/apology strings. The exact
//! wording is user-facing contract, so tests pin it.

use aegis_core::types::{Claim, Policy};
use regex::Regex;
use std::sync::LazyLock;

static CLAIM_HINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"claim|status|filed").expect("claim hint regex"));

static POLICY_HINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"policy|coverage|premium").expect("policy hint regex"));

/// Apology returned when a claim lookup fails in transit.
pub const CLAIM_LOOKUP_FAILED: &str = "I encountered an error retrieving the claim information. \
     Please try again or contact customer service for assistance.";

/// Apology returned when a policy lookup fails in transit.
pub const POLICY_LOOKUP_FAILED: &str = "I encountered an error retrieving the policy information. \
     Please try again or contact customer service for assistance.";

/// Apology returned when the FAQ search fails in transit.
pub const FAQ_SEARCH_FAILED: &str = "I encountered an error searching for information. \
     Please try rephrasing your question or contact customer service for assistance.";

/// Fixed reply for escalated turns: contact channels plus the SLA statement.
pub fn escalation_response() -> &'static str {
    "I understand you'd like to speak with a representative. I'm escalating your request to our customer service team.\n\n\
     **You can reach us directly:**\n\
     - Phone: 1-800-555-0123 (24/7 for claims, Mon-Sat for general inquiries)\n\
     - Email: support@insurance.com\n\
     - Live Chat: Available on our website\n\n\
     A representative will be available to assist you shortly. Your case has been flagged as priority, \
     and we typically respond to escalated requests within 1 hour during business hours.\n\n\
     Is there anything else I can help you with while you wait?"
}

/// Not-found reply for a claim lookup, naming the expected format.
pub fn claim_not_found(claim_number: &str) -> String {
    format!(
        "I couldn't find a claim with the number {claim_number}. Please verify the claim number \
         and try again. Claim numbers follow the format CLM-2024-XXXX."
    )
}

/// Not-found reply for a policy lookup, naming the expected format.
pub fn policy_not_found(policy_number: &str) -> String {
    format!(
        "I couldn't find a policy with the number {policy_number}. Please verify the policy number \
         and try again. Policy numbers follow the format POL-2024-XXX."
    )
}

/// Map a claim status code to its human-readable phrase.
///
/// Unrecognized codes get the generic phrase rather than an error.
fn status_phrase(status: &str) -> &'static str {
    match status {
        "submitted" => "has been received and is awaiting initial review",
        "under_review" => "is currently under review by our claims adjuster",
        "approved" => "has been approved for payment",
        "rejected" => "has been rejected",
        "paid" => "has been processed and payment has been completed",
        _ => "is being processed",
    }
}

/// Render the multi-line status report for a claim.
pub fn format_claim_status(claim: &Claim) -> String {
    let mut out = format!("**Claim Status for {}**\n\n", claim.claim_number);
    out.push_str(&format!(
        "Status: **{}**\n",
        claim.status.replace('_', " ").to_uppercase()
    ));
    out.push_str(&format!("Your claim {}.\n\n", status_phrase(&claim.status)));
    out.push_str("**Claim Details:**\n");
    out.push_str(&format!("- Type: {}\n", capitalize(&claim.claim_type)));
    out.push_str(&format!(
        "- Claim Amount: {}\n",
        format_usd(claim.claim_amount)
    ));

    if let Some(approved) = claim.approved_amount {
        if approved > 0.0 {
            out.push_str(&format!("- Approved Amount: {}\n", format_usd(approved)));
        }
    }

    out.push_str(&format!("- Filed Date: {}\n", claim.filed_date));
    out.push_str(&format!("- Last Updated: {}\n", claim.last_updated));

    if let Some(completion) = claim.estimated_completion {
        out.push_str(&format!("- Estimated Completion: {completion}\n"));
    }

    out.push_str(&format!("\n**Description:** {}\n", claim.description));

    if let Some(ref notes) = claim.adjuster_notes {
        out.push_str(&format!("\n**Notes:** {notes}\n"));
    }

    match claim.status.as_str() {
        "under_review" => out.push_str(
            "\nWe will notify you once the review is complete. If you have additional documents \
             to submit, please call us at 1-800-CLAIM-NOW.",
        ),
        "approved" => out.push_str("\nPayment will be processed within 3-5 business days."),
        _ => {}
    }

    out
}

/// Render the policy information summary.
pub fn format_policy_info(policy: &Policy) -> String {
    let mut out = format!("**Policy Information for {}**\n\n", policy.policy_number);
    out.push_str(&format!("**Policyholder:** {}\n", policy.policy_holder_name));
    out.push_str(&format!(
        "**Type:** {} Insurance\n",
        capitalize(&policy.policy_type)
    ));
    out.push_str(&format!("**Status:** {}\n\n", policy.status.to_uppercase()));
    out.push_str("**Coverage Details:**\n");
    out.push_str(&format!(
        "- Coverage Amount: {}\n",
        format_usd(policy.coverage_amount)
    ));
    out.push_str(&format!(
        "- Premium: {} annually\n",
        format_usd(policy.premium_amount)
    ));
    out.push_str(&format!(
        "- Policy Period: {} to {}\n\n",
        policy.start_date, policy.end_date
    ));
    out.push_str(
        "For detailed coverage information or to make changes to your policy, please call us \
         at 1-800-555-0123 or log into your online account.",
    );
    out
}

/// Fallback reply when no FAQ clears the relevance threshold.
///
/// Branches on whether the query looks claim- or policy-related; otherwise
/// offers the capability menu.
pub fn default_response(lower_query: &str) -> String {
    let mut out = String::from("I understand you're looking for information");

    if CLAIM_HINT_RE.is_match(lower_query) {
        out.push_str(" about claims. ");
        out.push_str(
            "You can check your claim status by providing your claim number (e.g., CLM-2024-1001). ",
        );
        out.push_str("To file a new claim, call 1-800-CLAIM-NOW or use our mobile app.");
    } else if POLICY_HINT_RE.is_match(lower_query) {
        out.push_str(" about your policy. ");
        out.push_str(
            "You can check policy details by providing your policy number (e.g., POL-2024-001). ",
        );
        out.push_str("For policy changes, call 1-800-555-0123 or log into your account.");
    } else {
        out.push_str(". Here are some things I can help you with:\n\n");
        out.push_str("- **Check claim status** - Just provide your claim number\n");
        out.push_str("- **Policy information** - Give me your policy number\n");
        out.push_str("- **File a claim** - Ask 'How do I file a claim?'\n");
        out.push_str("- **Payment questions** - Ask about payment methods or due dates\n");
        out.push_str("- **General questions** - Contact info, business hours, mobile app\n\n");
        out.push_str("If you need to speak with a representative, just let me know!");
    }

    out
}

/// Reply for an FAQ hit: the question as a heading plus its answer.
pub fn faq_answer(question: &str, answer: &str) -> String {
    format!("**{question}**\n\n{answer}")
}

// =============================================================================
// Helpers
// =============================================================================

/// Format a dollar amount with thousands separators.
///
/// Whole amounts drop the cents ("$1,500"); fractional amounts keep two
/// decimal places ("$1,500.50").
fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = (cents % 100).abs();

    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if whole < 0 { "-" } else { "" };

    if frac == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac:02}")
    }
}

/// Upper-case the first character, leaving the rest untouched.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base_claim() -> Claim {
        Claim {
            claim_number: "CLM-2024-1001".to_string(),
            claim_type: "auto".to_string(),
            status: "submitted".to_string(),
            claim_amount: 3200.0,
            approved_amount: None,
            filed_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            last_updated: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            estimated_completion: None,
            description: "Rear-end collision on Highway 9".to_string(),
            adjuster_notes: None,
            policy: None,
        }
    }

    fn base_policy() -> Policy {
        Policy {
            policy_number: "POL-2024-001".to_string(),
            policy_holder_name: "Jordan Avery".to_string(),
            policy_type: "auto".to_string(),
            status: "active".to_string(),
            coverage_amount: 250000.0,
            premium_amount: 1450.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        }
    }

    // ---- Money formatting ----

    #[test]
    fn test_format_usd_thousands_separator() {
        assert_eq!(format_usd(1500.0), "$1,500");
        assert_eq!(format_usd(250000.0), "$250,000");
        assert_eq!(format_usd(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_format_usd_small_amounts() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.0), "$999");
    }

    #[test]
    fn test_format_usd_fractional() {
        assert_eq!(format_usd(1500.5), "$1,500.50");
        assert_eq!(format_usd(42.07), "$42.07");
    }

    // ---- Claim formatting ----

    #[test]
    fn test_claim_status_header_and_status_line() {
        let text = format_claim_status(&base_claim());
        assert!(text.contains("**Claim Status for CLM-2024-1001**"));
        assert!(text.contains("Status: **SUBMITTED**"));
        assert!(text.contains("has been received and is awaiting initial review"));
        assert!(text.contains("- Type: Auto"));
        assert!(text.contains("- Claim Amount: $3,200"));
        assert!(text.contains("- Filed Date: 2024-03-15"));
    }

    #[test]
    fn test_claim_under_review_status_and_callback_line() {
        let mut claim = base_claim();
        claim.status = "under_review".to_string();
        let text = format_claim_status(&claim);
        assert!(text.contains("Status: **UNDER REVIEW**"));
        assert!(text.contains("is currently under review by our claims adjuster"));
        assert!(text.contains("1-800-CLAIM-NOW"));
    }

    #[test]
    fn test_claim_approved_payment_window_line() {
        let mut claim = base_claim();
        claim.status = "approved".to_string();
        let text = format_claim_status(&claim);
        assert!(text.contains("has been approved for payment"));
        assert!(text.contains("Payment will be processed within 3-5 business days."));
    }

    #[test]
    fn test_claim_paid_phrase() {
        let mut claim = base_claim();
        claim.status = "paid".to_string();
        let text = format_claim_status(&claim);
        assert!(text.contains("Status: **PAID**"));
        assert!(text.contains("has been processed and payment has been completed"));
        // No trailing line for paid.
        assert!(!text.contains("3-5 business days"));
        assert!(!text.contains("1-800-CLAIM-NOW"));
    }

    #[test]
    fn test_claim_unrecognized_status_uses_default_phrase() {
        let mut claim = base_claim();
        claim.status = "pending_documents".to_string();
        let text = format_claim_status(&claim);
        assert!(text.contains("Status: **PENDING DOCUMENTS**"));
        assert!(text.contains("is being processed"));
    }

    #[test]
    fn test_claim_zero_approved_amount_omits_line() {
        let mut claim = base_claim();
        claim.approved_amount = Some(0.0);
        let text = format_claim_status(&claim);
        assert!(!text.contains("Approved Amount"));
    }

    #[test]
    fn test_claim_positive_approved_amount_includes_line() {
        let mut claim = base_claim();
        claim.approved_amount = Some(1500.0);
        let text = format_claim_status(&claim);
        assert!(text.contains("- Approved Amount: $1,500"));
    }

    #[test]
    fn test_claim_optional_lines_present_when_set() {
        let mut claim = base_claim();
        claim.estimated_completion = NaiveDate::from_ymd_opt(2024, 4, 30);
        claim.adjuster_notes = Some("Awaiting repair estimate".to_string());
        let text = format_claim_status(&claim);
        assert!(text.contains("- Estimated Completion: 2024-04-30"));
        assert!(text.contains("**Notes:** Awaiting repair estimate"));
    }

    #[test]
    fn test_claim_optional_lines_absent_when_unset() {
        let text = format_claim_status(&base_claim());
        assert!(!text.contains("Estimated Completion"));
        assert!(!text.contains("**Notes:**"));
    }

    // ---- Policy formatting ----

    #[test]
    fn test_policy_info_fields() {
        let text = format_policy_info(&base_policy());
        assert!(text.contains("**Policy Information for POL-2024-001**"));
        assert!(text.contains("**Policyholder:** Jordan Avery"));
        assert!(text.contains("**Type:** Auto Insurance"));
        assert!(text.contains("**Status:** ACTIVE"));
        assert!(text.contains("- Coverage Amount: $250,000"));
        assert!(text.contains("- Premium: $1,450 annually"));
        assert!(text.contains("- Policy Period: 2024-01-01 to 2024-12-31"));
        assert!(text.contains("1-800-555-0123"));
    }

    // ---- Not-found and apologies ----

    #[test]
    fn test_claim_not_found_names_format() {
        let text = claim_not_found("CLM-2024-9999");
        assert!(text.contains("CLM-2024-9999"));
        assert!(text.contains("CLM-2024-XXXX"));
    }

    #[test]
    fn test_policy_not_found_names_format() {
        let text = policy_not_found("POL-2024-999");
        assert!(text.contains("POL-2024-999"));
        assert!(text.contains("POL-2024-XXX"));
    }

    // ---- Default response branches ----

    #[test]
    fn test_default_response_claim_branch() {
        let text = default_response("when was my thing filed");
        assert!(text.contains("about claims"));
        assert!(text.contains("CLM-2024-1001"));
    }

    #[test]
    fn test_default_response_policy_branch() {
        let text = default_response("how much coverage do i have");
        assert!(text.contains("about your policy"));
        assert!(text.contains("POL-2024-001"));
    }

    #[test]
    fn test_default_response_generic_menu() {
        let text = default_response("hello there");
        assert!(text.contains("Here are some things I can help you with"));
        assert!(text.contains("**Check claim status**"));
        assert!(text.contains("representative"));
    }

    #[test]
    fn test_claim_branch_beats_policy_branch() {
        // Query mentions both; claim check runs first.
        let text = default_response("claim against my policy");
        assert!(text.contains("about claims"));
    }

    // ---- Escalation / FAQ replies ----

    #[test]
    fn test_escalation_response_contact_channels_and_sla() {
        let text = escalation_response();
        assert!(text.contains("1-800-555-0123"));
        assert!(text.contains("support@insurance.com"));
        assert!(text.contains("within 1 hour"));
    }

    #[test]
    fn test_faq_answer_heading() {
        let text = faq_answer("How do I file a claim?", "Call 1-800-CLAIM-NOW.");
        assert_eq!(
            text,
            "**How do I file a claim?**\n\nCall 1-800-CLAIM-NOW."
        );
    }

    // ---- Capitalize ----

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("auto"), "Auto");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("home owner"), "Home owner");
    }
}
