// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Confidence-tiered response selection.
//!
//! Maps a match result (or its absence) onto one of three mutually
//! exclusive outcomes: a direct answer, a clarification-prefixed answer,
//! or the human-handoff offer.
//!
//! With the default matcher floor of 0.7 the clarification band (0.6-0.7)
//! is unreachable through `find_best_match`; it becomes live when the
//! engine's `accept_threshold` is configured down to 0.6.

use faqdesk_config::model::MatcherConfig;
use faqdesk_core::types::{MatchResult, ResponseKind};

/// Fixed fallback offering escalation when no usable match exists.
pub const NO_MATCH_RESPONSE: &str = "I couldn't find a specific answer for your question. \
     Would you like to speak with a human agent for personalized assistance?";

/// A classified reply ready to be surfaced to the customer.
#[derive(Debug, Clone)]
pub struct PolicyOutcome {
    pub kind: ResponseKind,
    pub text: String,
    /// Present for matched outcomes; clamped to 1.0, rounded to 2 decimals.
    pub confidence: Option<f64>,
    pub matched_question: Option<String>,
    pub matched_category: Option<String>,
}

/// Maps match scores onto response tiers.
#[derive(Debug, Clone)]
pub struct ResponsePolicy {
    direct_threshold: f64,
    clarify_threshold: f64,
}

impl ResponsePolicy {
    /// Create a policy from the matcher configuration.
    pub fn new(config: &MatcherConfig) -> Self {
        Self {
            direct_threshold: config.direct_threshold,
            clarify_threshold: config.clarify_threshold,
        }
    }

    /// Classify a match result into one of the three response tiers.
    pub fn classify(&self, result: Option<&MatchResult>) -> PolicyOutcome {
        match result {
            Some(m) if m.combined_score >= self.direct_threshold => PolicyOutcome {
                kind: ResponseKind::Faq,
                text: m.entry.answer.clone(),
                confidence: Some(confidence_of(m.combined_score)),
                matched_question: Some(m.entry.question.clone()),
                matched_category: Some(m.entry.category.clone()),
            },
            Some(m) if m.combined_score >= self.clarify_threshold => PolicyOutcome {
                kind: ResponseKind::Clarification,
                text: format!(
                    "I think you're asking about: {}\n\n{}",
                    m.entry.question, m.entry.answer
                ),
                confidence: Some(confidence_of(m.combined_score)),
                matched_question: Some(m.entry.question.clone()),
                matched_category: None,
            },
            _ => PolicyOutcome {
                kind: ResponseKind::HumanHandoffRequest,
                text: NO_MATCH_RESPONSE.to_string(),
                confidence: None,
                matched_question: None,
                matched_category: None,
            },
        }
    }
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self::new(&MatcherConfig::default())
    }
}

/// User-visible confidence: the combined score clamped to 1.0 (the intent
/// boost may push it past 1.0 internally) and rounded to two decimals.
fn confidence_of(score: f64) -> f64 {
    (score.min(1.0) * 100.0).round() / 100.0
}
