//! FAQ relevance scoring.
//!
//! A heuristic bag-of-words scorer, not a search index. Scores are a
//! saturating heuristic normalized against the token count; stacked bonuses
//! can push a score past 1.0, and that is fine — only the 0.3 threshold and
//! the relative ordering matter.

use aegis_core::types::Faq;

/// Minimum score for an FAQ answer to beat the default response.
pub const RELEVANCE_THRESHOLD: f64 = 0.3;

/// Score one FAQ entry against a lower-cased query.
///
/// Tokens under 3 characters are skipped for scoring but still count toward
/// the denominator. That asymmetry is inherited behavior; keep it.
pub fn relevance_score(lower_query: &str, faq: &Faq) -> f64 {
    let tokens: Vec<&str> = lower_query.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let keywords: Vec<String> = faq.keywords.iter().map(|k| k.to_lowercase()).collect();
    let question = faq.question.to_lowercase();
    let question_words: Vec<&str> = question.split_whitespace().collect();
    let answer = faq.answer.to_lowercase();

    let mut points = 0u32;
    for token in &tokens {
        if token.chars().count() < 3 {
            continue;
        }
        if keywords
            .iter()
            .any(|k| k.contains(token) || token.contains(k.as_str()))
        {
            points += 3;
        }
        if question_words
            .iter()
            .any(|qw| qw.contains(token) || token.contains(qw))
        {
            points += 2;
        }
        if answer.contains(token) {
            points += 1;
        }
    }

    f64::from(points) / (tokens.len() as f64 * 3.0)
}

/// Pick the best-scoring FAQ for a query.
///
/// `faqs` arrive ordered by descending priority; ties keep the earlier
/// (higher-priority) entry.
pub fn best_match<'a>(lower_query: &str, faqs: &'a [Faq]) -> Option<(&'a Faq, f64)> {
    let mut best: Option<(&Faq, f64)> = None;
    for faq in faqs {
        let score = relevance_score(lower_query, faq);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((faq, score));
        }
    }
    best
}

// =============================================================================
// Tests
// =============================================================================
