// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent notification seam.

use async_trait::async_trait;

use crate::error::FaqdeskError;
use crate::types::{Conversation, HandoffTicket};

/// Best-effort notifier invoked after a handoff ticket is created.
///
/// Delivery is advisory: the ticket is already durable when this runs,
/// and failures must never propagate to the customer.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Notifies the human agent about a freshly created ticket.
    async fn notify_agent(
        &self,
        ticket: &HandoffTicket,
        conversation: &Conversation,
    ) -> Result<(), FaqdeskError>;
}
