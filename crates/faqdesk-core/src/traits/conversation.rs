// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation and turn persistence.

use async_trait::async_trait;

use crate::error::FaqdeskError;
use crate::types::{Conversation, ConversationMode, Turn};

/// Store for conversations and their append-only turn history.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Fetches the conversation for `session_id`, creating it on first
    /// contact. Updates `last_active_at` on every call.
    async fn get_or_create(
        &self,
        session_id: &str,
        language: &str,
    ) -> Result<Conversation, FaqdeskError>;

    /// Fetches a conversation by session id without creating one.
    async fn find_by_session(
        &self,
        session_id: &str,
    ) -> Result<Option<Conversation>, FaqdeskError>;

    /// Appends a turn to the conversation history.
    async fn append_turn(
        &self,
        conversation_id: &str,
        content: &str,
        is_user: bool,
    ) -> Result<Turn, FaqdeskError>;

    /// Returns up to `limit` turns, newest first.
    async fn recent_turns(
        &self,
        conversation_id: &str,
        limit: u32,
    ) -> Result<Vec<Turn>, FaqdeskError>;

    /// Returns the full turn history, oldest first.
    async fn history(&self, conversation_id: &str) -> Result<Vec<Turn>, FaqdeskError>;

    /// Persists the orchestrator mode for the conversation.
    async fn set_mode(
        &self,
        conversation_id: &str,
        mode: ConversationMode,
    ) -> Result<(), FaqdeskError>;
}
