// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP email notification for new handoff tickets.
//!
//! Delivery is best-effort: a missing admin address logs a warning and
//! returns Ok, and transport failures surface as `Notify` errors that the
//! orchestrator logs without ever affecting the customer's request.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use faqdesk_config::model::NotifyConfig;
use faqdesk_core::types::{Conversation, HandoffTicket};
use faqdesk_core::{FaqdeskError, Notifier};

/// Email notifier backed by an async SMTP transport.
pub struct EmailNotifier {
    config: NotifyConfig,
}

impl EmailNotifier {
    /// Create a notifier from the notify configuration.
    pub fn new(config: NotifyConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, FaqdeskError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
                .map_err(|e| FaqdeskError::Notify {
                    message: format!("invalid SMTP relay {}", self.config.smtp_host),
                    source: Some(Box::new(e)),
                })?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        ) {
            builder = builder.credentials(Credentials::new(user, pass));
        }
        Ok(builder.build())
    }

    fn parse_mailbox(address: &str, field: &str) -> Result<Mailbox, FaqdeskError> {
        address.parse().map_err(|e| FaqdeskError::Notify {
            message: format!("invalid {field} address `{address}`"),
            source: Some(Box::new(e)),
        })
    }

    /// Log-only SMS alert. The SMS gateway integration is intentionally a
    /// stub; when enabled it records what would have been sent.
    fn sms_alert(&self, ticket: &HandoffTicket) {
        if !self.config.sms_enabled {
            return;
        }
        let Some(ref agent_phone) = self.config.agent_phone else {
            return;
        };
        info!(
            agent_phone = %agent_phone,
            customer = %ticket.name,
            reference = %ticket.reference(),
            "SMS alert would be sent"
        );
    }
}

/// Format a handoff ticket as the notification email body.
fn format_ticket_email(ticket: &HandoffTicket, conversation: &Conversation) -> String {
    format!(
        "NEW CUSTOMER HANDOFF REQUEST\n\
         \n\
         Ticket ID: {reference}\n\
         Customer Name: {name}\n\
         Contact Number: {phone}\n\
         Problem Summary: {summary}\n\
         Request Time: {created_at}\n\
         Conversation ID: {conversation_id}\n\
         Language: {language}\n\
         Status: {status}\n\
         \n\
         Please contact the customer as soon as possible.\n",
        reference = ticket.reference(),
        name = ticket.name,
        phone = ticket.phone,
        summary = ticket.problem_summary,
        created_at = ticket.created_at,
        conversation_id = ticket.conversation_id,
        language = conversation.language,
        status = ticket.status,
    )
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify_agent(
        &self,
        ticket: &HandoffTicket,
        conversation: &Conversation,
    ) -> Result<(), FaqdeskError> {
        let Some(ref admin_email) = self.config.admin_email else {
            warn!(
                ticket_id = %ticket.id,
                "notify.admin_email not configured; handoff ticket created but not notified"
            );
            return Ok(());
        };

        let message = Message::builder()
            .from(Self::parse_mailbox(&self.config.from_address, "from")?)
            .to(Self::parse_mailbox(admin_email, "admin")?)
            .subject(format!(
                "New Customer Handoff Request - Ticket #{}",
                ticket.reference()
            ))
            .body(format_ticket_email(ticket, conversation))
            .map_err(|e| FaqdeskError::Notify {
                message: "failed to build notification email".to_string(),
                source: Some(Box::new(e)),
            })?;

        self.transport()?
            .send(message)
            .await
            .map_err(|e| FaqdeskError::Notify {
                message: format!("SMTP delivery to {admin_email} failed"),
                source: Some(Box::new(e)),
            })?;

        info!(ticket_id = %ticket.id, "agent notification sent");
        self.sms_alert(ticket);
        Ok(())
    }
}
