// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! FAQ corpus matching.
//!
//! Scans the corpus with a blended similarity score plus keyword overlap,
//! boosts question-shaped queries, and keeps the best candidate above the
//! acceptance floor. The scan is a sequential strictly-greater fold over a
//! stably ordered corpus snapshot, so ties deterministically keep the
//! earliest-registered entry.

use faqdesk_config::model::MatcherConfig;
use faqdesk_core::types::{FaqEntry, MatchResult};
use tracing::debug;

use crate::keywords::KeywordExtractor;
use crate::normalize::normalize;
use crate::similarity::SimilarityScorer;

/// Interrogative words whose presence marks a question-shaped query.
/// Matched by substring containment against the normalized query.
const INTENT_MARKERS: &[&str] = &[
    "how", "what", "when", "where", "why", "can", "do", "is", "are",
];

/// Corpus matcher with injected weights and thresholds.
pub struct MatchEngine {
    config: MatcherConfig,
    scorer: SimilarityScorer,
    extractor: KeywordExtractor,
}

impl MatchEngine {
    /// Create an engine from the matcher configuration.
    pub fn new(config: MatcherConfig) -> Self {
        let scorer = SimilarityScorer::new(&config);
        let extractor = KeywordExtractor::new(&config.extra_stop_words);
        Self {
            config,
            scorer,
            extractor,
        }
    }

    /// Find the best-scoring corpus entry for a query.
    ///
    /// Returns `None` when no entry reaches the acceptance floor
    /// (`accept_threshold`, 0.7 by default). A candidate replaces the
    /// current best only when its combined score is strictly greater, so
    /// equal scores keep the earliest entry in corpus order.
    pub fn find_best_match(&self, query: &str, corpus: &[FaqEntry]) -> Option<MatchResult> {
        let normalized_query = normalize(query);
        if normalized_query.is_empty() {
            return None;
        }

        let query_keywords = self.extractor.extract(&normalized_query);
        let boost = INTENT_MARKERS
            .iter()
            .any(|marker| normalized_query.contains(marker));

        let mut best: Option<MatchResult> = None;
        for entry in corpus {
            let text_similarity = self.scorer.score(&normalized_query, &entry.question);
            let keyword_score = keyword_match_score(&query_keywords, &entry.keywords);

            let mut combined = text_similarity * (1.0 - self.config.keyword_weight)
                + keyword_score * self.config.keyword_weight;
            if boost {
                // No upper clamp: scores above 1.0 are accepted behavior and
                // still compare correctly against the thresholds.
                combined *= self.config.intent_boost;
            }

            let is_better = best
                .as_ref()
                .is_none_or(|current| combined > current.combined_score);
            if is_better && combined >= self.config.accept_threshold {
                best = Some(MatchResult {
                    entry: entry.clone(),
                    combined_score: combined,
                    text_similarity,
                    keyword_score,
                });
            }
        }

        if let Some(ref result) = best {
            debug!(
                question = %result.entry.question,
                score = result.combined_score,
                text_similarity = result.text_similarity,
                keyword_score = result.keyword_score,
                "matched corpus entry"
            );
        }
        best
    }
}

/// Share of query keywords that overlap the entry's declared keywords.
///
/// A query keyword counts as matched when it contains, or is contained in,
/// any entry keyword (case-insensitive, normalized). Returns 0 when either
/// side has no keywords.
fn keyword_match_score(query_keywords: &[String], entry_keywords: &[String]) -> f64 {
    if query_keywords.is_empty() || entry_keywords.is_empty() {
        return 0.0;
    }

    let normalized_entry: Vec<String> = entry_keywords.iter().map(|k| normalize(k)).collect();
    let matches = query_keywords
        .iter()
        .filter(|qk| {
            normalized_entry
                .iter()
                .any(|ek| !ek.is_empty() && (ek.contains(qk.as_str()) || qk.contains(ek)))
        })
        .count();

    matches as f64 / query_keywords.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, question: &str, keywords: &[&str]) -> FaqEntry {
        FaqEntry {
            id: id.to_string(),
            question: question.to_string(),
            answer: format!("answer for {id}"),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            category: "General".to_string(),
        }
    }

    fn engine() -> MatchEngine {
        MatchEngine::new(MatcherConfig::default())
    }

    #[test]
    fn matches_rephrased_question_above_floor() {
        let corpus = vec![entry(
            "svc",
            "What is your service?",
            &["service", "astrology"],
        )];
        let result = engine()
            .find_best_match("What service do you provide?", &corpus)
            .expect("rephrased query should match");
        assert_eq!(result.entry.id, "svc");
        assert!(result.combined_score >= 0.7);
        assert!((result.keyword_score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn never_returns_below_the_acceptance_floor() {
        let corpus = vec![
            entry("a", "What is astrology?", &["astrology"]),
            entry("b", "How do I book a reading?", &["booking", "reading"]),
        ];
        let e = engine();
        for query in [
            "Tell me about pizza recipes",
            "completely unrelated gibberish",
            "weather forecast tomorrow",
        ] {
            if let Some(result) = e.find_best_match(query, &corpus) {
                assert!(
                    result.combined_score >= 0.7,
                    "{query:?} matched below floor: {}",
                    result.combined_score
                );
            }
        }
    }

    #[test]
    fn unrelated_query_yields_no_match() {
        let corpus = vec![entry("a", "What is astrology?", &["astrology"])];
        assert!(
            engine()
                .find_best_match("Tell me about pizza recipes", &corpus)
                .is_none()
        );
    }

    #[test]
    fn empty_query_and_empty_corpus_yield_none() {
        let corpus = vec![entry("a", "What is astrology?", &["astrology"])];
        let e = engine();
        assert!(e.find_best_match("", &corpus).is_none());
        assert!(e.find_best_match("?!", &corpus).is_none());
        assert!(e.find_best_match("What is astrology?", &[]).is_none());
    }

    #[test]
    fn tie_keeps_the_earliest_entry() {
        // Identical questions and keywords produce identical scores; the
        // first-registered entry must win.
        let corpus = vec![
            entry("first", "What is astrology?", &["astrology"]),
            entry("second", "What is astrology?", &["astrology"]),
        ];
        let result = engine()
            .find_best_match("What is astrology?", &corpus)
            .expect("exact question should match");
        assert_eq!(result.entry.id, "first");
    }

    #[test]
    fn intent_boost_can_push_scores_above_one() {
        // Exact match with full keyword overlap scores 1.0 before the
        // boost; the boosted value is kept unclamped internally.
        let corpus = vec![entry("a", "What is astrology?", &["astrology"])];
        let result = engine()
            .find_best_match("What is astrology?", &corpus)
            .expect("exact question should match");
        assert!(
            result.combined_score > 1.0,
            "expected boosted score above 1.0, got {}",
            result.combined_score
        );
        assert!((result.combined_score - 1.1).abs() < 1e-9);
    }

    #[test]
    fn statement_without_intent_marker_is_not_boosted() {
        let corpus = vec![entry("r", "refund policy information", &[])];
        let result = MatchEngine::new(MatcherConfig {
            accept_threshold: 0.6,
            ..MatcherConfig::default()
        })
        .find_best_match("refund policy", &corpus)
        .expect("related query should match at the lowered floor");
        // No marker word appears in "refund policy", so combined equals the
        // unboosted blend, which sits in the clarification band.
        assert!(result.combined_score >= 0.6);
        assert!(result.combined_score < 0.7);
    }

    #[test]
    fn lowered_floor_exposes_the_clarification_band() {
        // At the default 0.7 floor this query is rejected outright; at 0.6
        // the clarification band becomes reachable.
        let corpus = vec![entry("r", "refund policy information", &[])];
        assert!(engine().find_best_match("refund policy", &corpus).is_none());

        let lowered = MatchEngine::new(MatcherConfig {
            accept_threshold: 0.6,
            ..MatcherConfig::default()
        });
        let result = lowered
            .find_best_match("refund policy", &corpus)
            .expect("lowered floor should accept the candidate");
        assert!((0.6..0.7).contains(&result.combined_score));
    }

    #[test]
    fn keyword_score_counts_mutual_containment() {
        let query = vec!["astrology".to_string(), "provide".to_string()];
        let entry_kw = vec!["astro".to_string(), "service".to_string()];
        // "astro" is contained in "astrology"; "provide" matches nothing.
        assert!((keyword_match_score(&query, &entry_kw) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn keyword_score_zero_without_keywords() {
        assert_eq!(keyword_match_score(&[], &["a".to_string()]), 0.0);
        assert_eq!(keyword_match_score(&["a".to_string()], &[]), 0.0);
    }
}
