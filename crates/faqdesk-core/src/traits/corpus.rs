// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only access to the FAQ corpus.

use async_trait::async_trait;

use crate::error::FaqdeskError;
use crate::types::FaqEntry;

/// Supplier of the FAQ corpus the match engine scans.
///
/// Implementations must return entries in a stable order (insertion order
/// for the SQLite store); the engine's first-seen tie-break depends on it.
#[async_trait]
pub trait CorpusProvider: Send + Sync {
    /// Returns a snapshot of the full corpus.
    async fn entries(&self) -> Result<Vec<FaqEntry>, FaqdeskError>;
}
