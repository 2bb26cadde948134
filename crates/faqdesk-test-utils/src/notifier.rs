// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording notifier for asserting on notification behavior.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use faqdesk_core::types::{Conversation, HandoffTicket};
use faqdesk_core::{FaqdeskError, Notifier};

/// Notifier that records every delivery and can be told to fail.
#[derive(Default)]
pub struct RecordingNotifier {
    notified: Arc<Mutex<Vec<HandoffTicket>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose deliveries always fail. Ticket creation must
    /// succeed regardless.
    pub fn failing() -> Self {
        Self {
            notified: Arc::default(),
            fail: true,
        }
    }

    /// Tickets notified so far, in delivery order.
    pub async fn notified(&self) -> Vec<HandoffTicket> {
        self.notified.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_agent(
        &self,
        ticket: &HandoffTicket,
        _conversation: &Conversation,
    ) -> Result<(), FaqdeskError> {
        if self.fail {
            return Err(FaqdeskError::Notify {
                message: "simulated delivery failure".to_string(),
                source: None,
            });
        }
        self.notified.lock().await.push(ticket.clone());
        Ok(())
    }
}
