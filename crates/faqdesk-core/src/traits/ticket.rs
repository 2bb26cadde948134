// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handoff ticket persistence.

use async_trait::async_trait;

use crate::error::FaqdeskError;
use crate::types::HandoffTicket;

/// Store for human-handoff tickets.
///
/// The at-most-one-pending-per-conversation invariant lives here: the
/// store must make `create_if_absent` atomic rather than relying on the
/// caller's read-then-write.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Returns the pending ticket for the conversation, if any.
    async fn find_pending(
        &self,
        conversation_id: &str,
    ) -> Result<Option<HandoffTicket>, FaqdeskError>;

    /// Creates a pending ticket unless one already exists for the
    /// conversation. Returns `(true, ticket)` on creation, or
    /// `(false, existing)` when a pending ticket was already queued.
    async fn create_if_absent(
        &self,
        conversation_id: &str,
        name: &str,
        phone: &str,
        problem_summary: &str,
    ) -> Result<(bool, HandoffTicket), FaqdeskError>;
}
