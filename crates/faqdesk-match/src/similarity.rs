// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blended string similarity scoring.
//!
//! Combines three classic fuzzy-matching formulations over a shared base
//! ratio (Sorensen-Dice bigram overlap, the `2M / T` Ratcliff-style family):
//!
//! - **token-sort ratio** -- order-invariant comparison after sorting tokens;
//! - **partial ratio** -- best alignment of the shorter string against every
//!   same-length character window of the longer one;
//! - **token-set ratio** -- intersection/difference construction that
//!   tolerates extra vocabulary on either side.
//!
//! The three sub-scores behave differently on word reordering, partial
//! containment, and vocabulary overlap; the weighted blend is what makes
//! the matcher robust. Substituting a single metric changes matching
//! quality materially, so all three are implemented faithfully.

use std::collections::BTreeSet;

use faqdesk_config::model::MatcherConfig;

use crate::normalize::normalize;

/// Blended similarity scorer with injected component weights.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    token_sort_weight: f64,
    partial_weight: f64,
    token_set_weight: f64,
}

impl SimilarityScorer {
    /// Create a scorer from the matcher configuration.
    pub fn new(config: &MatcherConfig) -> Self {
        Self {
            token_sort_weight: config.token_sort_weight,
            partial_weight: config.partial_weight,
            token_set_weight: config.token_set_weight,
        }
    }

    /// Blended similarity of two strings, in `[0, 1]`.
    ///
    /// Inputs are normalized first; if either normalizes to empty the score
    /// is 0. Symmetric in its arguments.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a = normalize(a);
        let b = normalize(b);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        self.token_sort_weight * token_sort_ratio(&a, &b)
            + self.partial_weight * partial_ratio(&a, &b)
            + self.token_set_weight * token_set_ratio(&a, &b)
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(&MatcherConfig::default())
    }
}

/// Base similarity ratio: character-bigram Sorensen-Dice coefficient.
///
/// Identical strings short-circuit to 1.0 so single-character inputs (which
/// have no bigrams) still compare equal to themselves.
fn ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    strsim::sorensen_dice(a, b)
}

/// Order-invariant similarity: tokens sorted alphabetically and rejoined
/// before comparison.
fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let sorted_join = |s: &str| {
        let mut tokens: Vec<&str> = s.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.join(" ")
    };
    ratio(&sorted_join(a), &sorted_join(b))
}

/// Best similarity of the shorter string against any same-length character
/// window of the longer string. Rewards partial containment.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let (mut shorter, mut longer): (Vec<char>, Vec<char>) =
        (a.chars().collect(), b.chars().collect());
    if shorter.len() > longer.len() {
        std::mem::swap(&mut shorter, &mut longer);
    }
    if shorter.is_empty() {
        return 0.0;
    }
    let shorter_str: String = shorter.iter().collect();
    if shorter.len() == longer.len() {
        let longer_str: String = longer.iter().collect();
        return ratio(&shorter_str, &longer_str);
    }

    let mut best = 0.0f64;
    for window in longer.windows(shorter.len()) {
        let window_str: String = window.iter().collect();
        let score = ratio(&shorter_str, &window_str);
        if score > best {
            best = score;
            if best >= 1.0 {
                break;
            }
        }
    }
    best
}

/// Similarity over deduplicated vocabulary: the sorted intersection is
/// compared against each side's intersection-plus-remainder string, and the
/// best of the three pairings wins. Tolerates extra words around a shared
/// core.
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();

    let intersection: Vec<&str> = set_a.intersection(&set_b).copied().collect();
    let only_a: Vec<&str> = set_a.difference(&set_b).copied().collect();
    let only_b: Vec<&str> = set_b.difference(&set_a).copied().collect();

    let combined = |base: &[&str], rest: &[&str]| -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(base.len() + rest.len());
        parts.extend_from_slice(base);
        parts.extend_from_slice(rest);
        parts.join(" ")
    };

    let t0 = combined(&intersection, &[]);
    let t1 = combined(&intersection, &only_a);
    let t2 = combined(&intersection, &only_b);

    ratio(&t0, &t1).max(ratio(&t0, &t2)).max(ratio(&t1, &t2))
}
