// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent notification delivery for Faqdesk handoff tickets.
//!
//! Notification is advisory: the ticket is already durable when a
//! notifier runs, and delivery failures never propagate to the customer.

pub mod email;

pub use email::EmailNotifier;

use async_trait::async_trait;

use faqdesk_core::types::{Conversation, HandoffTicket};
use faqdesk_core::{FaqdeskError, Notifier};

/// Notifier that does nothing. Used when notifications are disabled and in
/// tests.
#[derive(Debug, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify_agent(
        &self,
        _ticket: &HandoffTicket,
        _conversation: &Conversation,
    ) -> Result<(), FaqdeskError> {
        Ok(())
    }
}
