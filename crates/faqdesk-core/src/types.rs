// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Faqdesk workspace.
//!
//! Timestamps are ISO-8601 TEXT with millisecond precision, UTC. Entities
//! mirror the storage schema; transient values (match results, replies)
//! never touch disk.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One record of the FAQ corpus. Immutable at runtime; written only by the
/// importer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Lowercase keywords declared by the corpus curator.
    pub keywords: Vec<String>,
    pub category: String,
}

/// Orchestrator state persisted on each conversation.
///
/// `Normal` routes messages through the match engine; `AwaitingDetails`
/// records that the detail-collection prompt has been issued.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ConversationMode {
    #[default]
    Normal,
    AwaitingDetails,
}

/// A chat conversation keyed by the client-supplied session id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub session_id: String,
    pub language: String,
    pub mode: ConversationMode,
    pub created_at: String,
    pub last_active_at: String,
}

/// One message in a conversation's append-only history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: String,
    pub conversation_id: String,
    pub content: String,
    pub is_user: bool,
    pub created_at: String,
}

/// Lifecycle of a human-handoff ticket. Transitions past `Pending` are
/// driven by the external agent workflow, not by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Pending,
    Contacted,
    Resolved,
}

/// A customer's request to be contacted by a human agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffTicket {
    pub id: String,
    pub conversation_id: String,
    pub name: String,
    pub phone: String,
    pub problem_summary: String,
    pub status: TicketStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl HandoffTicket {
    /// Short human-friendly reference derived from the ticket id.
    pub fn reference(&self) -> String {
        self.id.chars().take(8).collect::<String>().to_uppercase()
    }
}

/// Best corpus candidate for a query, with its score breakdown.
///
/// `combined_score` may exceed 1.0 after the intent boost; it is kept
/// unclamped so threshold comparisons see the raw value.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub entry: FaqEntry,
    pub combined_score: f64,
    pub text_similarity: f64,
    pub keyword_score: f64,
}

/// Category of an assistant reply, as exposed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Confident direct answer from the corpus.
    Faq,
    /// Near-miss answer prefaced with a clarification.
    Clarification,
    /// No usable match; offer to connect a human agent.
    HumanHandoffRequest,
    /// Prompt asking for the customer's contact details.
    CollectHumanDetails,
}

/// Result of handling one inbound user message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub session_id: String,
    pub response_text: String,
    pub response_kind: ResponseKind,
    /// Present for matched outcomes, clamped to 1.0 and rounded to 2 dp.
    pub confidence: Option<f64>,
    pub matched_question: Option<String>,
    pub matched_category: Option<String>,
}

/// Result of a handoff-detail submission.
#[derive(Debug, Clone, Serialize)]
pub struct HandoffReceipt {
    pub created: bool,
    pub ticket_id: String,
    /// First 8 characters of the ticket id, uppercased.
    pub reference: String,
    pub already_queued: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn response_kind_wire_names() {
        assert_eq!(ResponseKind::Faq.to_string(), "faq");
        assert_eq!(ResponseKind::Clarification.to_string(), "clarification");
        assert_eq!(
            ResponseKind::HumanHandoffRequest.to_string(),
            "human_handoff_request"
        );
        assert_eq!(
            ResponseKind::CollectHumanDetails.to_string(),
            "collect_human_details"
        );
    }

    #[test]
    fn response_kind_round_trips_serde() {
        let kind = ResponseKind::CollectHumanDetails;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"collect_human_details\"");
        let parsed: ResponseKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, parsed);
    }

    #[test]
    fn ticket_status_parses_from_storage_strings() {
        assert_eq!(
            TicketStatus::from_str("pending").unwrap(),
            TicketStatus::Pending
        );
        assert_eq!(
            TicketStatus::from_str("contacted").unwrap(),
            TicketStatus::Contacted
        );
        assert_eq!(
            TicketStatus::from_str("resolved").unwrap(),
            TicketStatus::Resolved
        );
    }

    #[test]
    fn conversation_mode_defaults_to_normal() {
        assert_eq!(ConversationMode::default(), ConversationMode::Normal);
        assert_eq!(ConversationMode::Normal.to_string(), "normal");
        assert_eq!(
            ConversationMode::AwaitingDetails.to_string(),
            "awaiting_details"
        );
    }

    #[test]
    fn ticket_reference_is_first_eight_uppercased() {
        let ticket = HandoffTicket {
            id: "ab12cd34-5678-90ef-1234-567890abcdef".to_string(),
            conversation_id: "c1".to_string(),
            name: "Jo".to_string(),
            phone: "+1 234".to_string(),
            problem_summary: "help".to_string(),
            status: TicketStatus::Pending,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
        };
        assert_eq!(ticket.reference(), "AB12CD34");
    }
}
