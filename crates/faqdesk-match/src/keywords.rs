// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword extraction from user queries.
//!
//! Tokenizes normalized text and discards English function words and very
//! short tokens. Duplicates are intentionally preserved: the keyword match
//! score divides by the number of extracted tokens, so repeated content
//! words weight the denominator.

use std::collections::HashSet;

use crate::normalize::normalize;

/// Common English function words excluded from keyword matching.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
];

/// Minimum character count for a token to qualify as a keyword.
const MIN_TOKEN_LEN: usize = 3;

/// Extracts content-word keywords from free text.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
}

impl KeywordExtractor {
    /// Create an extractor using the built-in stop-word list plus any
    /// deployment-specific additions.
    pub fn new(extra_stop_words: &[String]) -> Self {
        let mut stop_words: HashSet<String> =
            STOP_WORDS.iter().map(|w| w.to_string()).collect();
        stop_words.extend(extra_stop_words.iter().map(|w| w.to_lowercase()));
        Self { stop_words }
    }

    /// Extract keywords in source order, duplicates preserved.
    ///
    /// Tokens are the whitespace-separated words of the normalized text;
    /// stop words and tokens shorter than three characters are dropped.
    pub fn extract(&self, text: &str) -> Vec<String> {
        normalize(text)
            .split_whitespace()
            .filter(|token| {
                token.chars().count() >= MIN_TOKEN_LEN && !self.stop_words.contains(*token)
            })
            .map(str::to_string)
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(&[])
    }
}
