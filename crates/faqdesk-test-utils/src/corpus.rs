// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory corpus provider for tests.

use async_trait::async_trait;

use faqdesk_core::types::FaqEntry;
use faqdesk_core::{CorpusProvider, FaqdeskError};

/// Fixed corpus served from memory in declaration order.
pub struct StaticCorpus {
    entries: Vec<FaqEntry>,
}

impl StaticCorpus {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    /// Build an entry with the common fields filled in.
    pub fn entry(id: &str, question: &str, answer: &str, keywords: &[&str]) -> FaqEntry {
        FaqEntry {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            category: "General".to_string(),
        }
    }
}

#[async_trait]
impl CorpusProvider for StaticCorpus {
    async fn entries(&self) -> Result<Vec<FaqEntry>, FaqdeskError> {
        Ok(self.entries.clone())
    }
}
