// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-message conversation orchestration.
//!
//! For every inbound user message the orchestrator decides between normal
//! Q&A and handoff-detail collection. The decision rule: within the most
//! recent five turns (newest first), if the latest assistant turn contains
//! "human agent" and the new user message contains an affirmative word,
//! the customer just accepted the escalation offer -- reply with the
//! detail-collection prompt and skip the matcher.
//!
//! The detection outcome is also persisted as an explicit conversation
//! `mode` so the escalation state is visible to the API and admin tooling
//! rather than being implicit in trailing history.

use std::sync::Arc;

use tracing::{debug, info, warn};

use faqdesk_config::model::MatcherConfig;
use faqdesk_core::types::{ChatReply, ConversationMode, HandoffReceipt, ResponseKind, Turn};
use faqdesk_core::{ConversationStore, CorpusProvider, FaqdeskError, Notifier, TicketStore};
use faqdesk_match::{MatchEngine, ResponsePolicy};

use crate::handoff;
use crate::locks::SessionLocks;

/// Number of trailing turns inspected for the escalation-reply heuristic.
const RECENT_WINDOW: u32 = 5;

/// Phrase marking an assistant turn as an escalation offer.
const HANDOFF_PHRASE: &str = "human agent";

/// Affirmative words accepted as a "yes" to the escalation offer.
const AFFIRMATIVES: &[&str] = &["yes", "ok", "sure"];

/// Fixed prompt asking the customer for their contact details.
pub const COLLECT_DETAILS_PROMPT: &str = "Please provide your details so our human agent can \
     contact you:\n\n1. Your Name\n2. Contact Number\n3. Brief summary of your issue";

/// Request-driven conversation service: one instance handles all sessions.
pub struct ChatService {
    corpus: Arc<dyn CorpusProvider>,
    conversations: Arc<dyn ConversationStore>,
    tickets: Arc<dyn TicketStore>,
    notifier: Arc<dyn Notifier>,
    engine: MatchEngine,
    policy: ResponsePolicy,
    locks: SessionLocks,
}

impl ChatService {
    /// Assemble the service from its collaborators and matcher settings.
    pub fn new(
        corpus: Arc<dyn CorpusProvider>,
        conversations: Arc<dyn ConversationStore>,
        tickets: Arc<dyn TicketStore>,
        notifier: Arc<dyn Notifier>,
        matcher_config: MatcherConfig,
    ) -> Self {
        let engine = MatchEngine::new(matcher_config.clone());
        let policy = ResponsePolicy::new(&matcher_config);
        Self {
            corpus,
            conversations,
            tickets,
            notifier,
            engine,
            policy,
            locks: SessionLocks::new(),
        }
    }

    /// Handle one inbound user message.
    ///
    /// Blank input is rejected before anything is persisted. Otherwise the
    /// user turn and the chosen reply are both appended to the turn log
    /// regardless of which branch produced the reply.
    pub async fn handle_user_message(
        &self,
        session_id: &str,
        language: &str,
        text: &str,
    ) -> Result<ChatReply, FaqdeskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FaqdeskError::InvalidInput(
                "message cannot be empty".to_string(),
            ));
        }

        let _guard = self.locks.acquire(session_id).await;

        let conversation = self.conversations.get_or_create(session_id, language).await?;
        self.conversations
            .append_turn(&conversation.id, text, true)
            .await?;

        let recent = self
            .conversations
            .recent_turns(&conversation.id, RECENT_WINDOW)
            .await?;

        let reply = if accepted_escalation_offer(&recent, text) {
            info!(session_id, "escalation offer accepted; collecting details");
            self.conversations
                .set_mode(&conversation.id, ConversationMode::AwaitingDetails)
                .await?;
            ChatReply {
                session_id: session_id.to_string(),
                response_text: COLLECT_DETAILS_PROMPT.to_string(),
                response_kind: ResponseKind::CollectHumanDetails,
                confidence: None,
                matched_question: None,
                matched_category: None,
            }
        } else {
            let entries = self.corpus.entries().await?;
            let result = self.engine.find_best_match(text, &entries);
            let outcome = self.policy.classify(result.as_ref());
            debug!(session_id, kind = %outcome.kind, "classified reply");
            ChatReply {
                session_id: session_id.to_string(),
                response_text: outcome.text,
                response_kind: outcome.kind,
                confidence: outcome.confidence,
                matched_question: outcome.matched_question,
                matched_category: outcome.matched_category,
            }
        };

        self.conversations
            .append_turn(&conversation.id, &reply.response_text, false)
            .await?;

        Ok(reply)
    }

    /// Handle a handoff-detail submission for an existing conversation.
    ///
    /// Validates the fields, creates (or finds) the pending ticket, resets
    /// the conversation mode, and fires the agent notification without
    /// awaiting its outcome.
    pub async fn submit_handoff_details(
        &self,
        session_id: &str,
        name: &str,
        phone: &str,
        problem_summary: &str,
    ) -> Result<HandoffReceipt, FaqdeskError> {
        handoff::validate_details(name, phone, problem_summary)?;

        let _guard = self.locks.acquire(session_id).await;

        let conversation = self
            .conversations
            .find_by_session(session_id)
            .await?
            .ok_or_else(|| FaqdeskError::UnknownSession(session_id.to_string()))?;

        let (created, ticket) = self
            .tickets
            .create_if_absent(&conversation.id, name, phone.trim(), problem_summary)
            .await?;

        if created {
            self.conversations
                .set_mode(&conversation.id, ConversationMode::Normal)
                .await?;

            let notifier = Arc::clone(&self.notifier);
            let ticket_for_notify = ticket.clone();
            let conversation_for_notify = conversation.clone();
            tokio::spawn(async move {
                if let Err(e) = notifier
                    .notify_agent(&ticket_for_notify, &conversation_for_notify)
                    .await
                {
                    warn!(
                        ticket_id = %ticket_for_notify.id,
                        error = %e,
                        "agent notification failed; ticket remains queued"
                    );
                }
            });
            info!(session_id, ticket_id = %ticket.id, "handoff ticket created");
        } else {
            info!(session_id, ticket_id = %ticket.id, "handoff already queued");
        }

        Ok(HandoffReceipt {
            created,
            reference: ticket.reference(),
            ticket_id: ticket.id,
            already_queued: !created,
        })
    }

    /// Full turn history for a session, oldest first.
    pub async fn conversation_history(
        &self,
        session_id: &str,
    ) -> Result<(String, Vec<Turn>), FaqdeskError> {
        let conversation = self
            .conversations
            .find_by_session(session_id)
            .await?
            .ok_or_else(|| FaqdeskError::UnknownSession(session_id.to_string()))?;
        let turns = self.conversations.history(&conversation.id).await?;
        Ok((conversation.id, turns))
    }
}

/// True when the user message is a "yes" to a recent escalation offer.
///
/// `recent` is newest first and includes the just-appended user turn; a
/// lone turn means there was no prior offer to accept.
fn accepted_escalation_offer(recent: &[Turn], user_text: &str) -> bool {
    if recent.len() <= 1 {
        return false;
    }
    let Some(last_assistant) = recent.iter().find(|t| !t.is_user) else {
        return false;
    };
    if !last_assistant
        .content
        .to_lowercase()
        .contains(HANDOFF_PHRASE)
    {
        return false;
    }
    let user_lower = user_text.to_lowercase();
    AFFIRMATIVES.iter().any(|word| user_lower.contains(word))
}
