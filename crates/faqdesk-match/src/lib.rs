// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! FAQ matching engine for the Faqdesk assistant.
//!
//! The pipeline: [`normalize`] cleans text, [`KeywordExtractor`] pulls
//! content words, [`SimilarityScorer`] blends three fuzzy ratios,
//! [`MatchEngine`] scans the corpus and applies keyword overlap plus the
//! intent boost, and [`ResponsePolicy`] maps the winning score onto a
//! response tier.

pub mod engine;
pub mod keywords;
pub mod normalize;
pub mod policy;
pub mod similarity;

pub use engine::MatchEngine;
pub use keywords::KeywordExtractor;
pub use normalize::normalize;
pub use policy::{NO_MATCH_RESPONSE, PolicyOutcome, ResponsePolicy};
pub use similarity::SimilarityScorer;
