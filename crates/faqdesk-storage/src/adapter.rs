// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementations of the core collaborator traits.
//!
//! Thin adapters over the typed query modules; each holds a clone of the
//! shared [`Database`] handle, so all of them funnel through the same
//! single writer thread.

use async_trait::async_trait;

use faqdesk_core::types::{Conversation, ConversationMode, FaqEntry, HandoffTicket, Turn};
use faqdesk_core::{ConversationStore, CorpusProvider, FaqdeskError, TicketStore};

use crate::database::Database;
use crate::queries;

/// Read-only corpus access backed by the `faqs` table.
pub struct SqliteCorpus {
    db: Database,
}

impl SqliteCorpus {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CorpusProvider for SqliteCorpus {
    async fn entries(&self) -> Result<Vec<FaqEntry>, FaqdeskError> {
        queries::faqs::list_faqs(&self.db).await
    }
}

/// Conversation and turn persistence backed by SQLite.
pub struct SqliteConversationStore {
    db: Database,
}

impl SqliteConversationStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConversationStore for SqliteConversationStore {
    async fn get_or_create(
        &self,
        session_id: &str,
        language: &str,
    ) -> Result<Conversation, FaqdeskError> {
        queries::conversations::get_or_create(&self.db, session_id, language).await
    }

    async fn find_by_session(
        &self,
        session_id: &str,
    ) -> Result<Option<Conversation>, FaqdeskError> {
        queries::conversations::find_by_session(&self.db, session_id).await
    }

    async fn append_turn(
        &self,
        conversation_id: &str,
        content: &str,
        is_user: bool,
    ) -> Result<Turn, FaqdeskError> {
        queries::turns::append_turn(&self.db, conversation_id, content, is_user).await
    }

    async fn recent_turns(
        &self,
        conversation_id: &str,
        limit: u32,
    ) -> Result<Vec<Turn>, FaqdeskError> {
        queries::turns::recent_turns(&self.db, conversation_id, limit).await
    }

    async fn history(&self, conversation_id: &str) -> Result<Vec<Turn>, FaqdeskError> {
        queries::turns::history(&self.db, conversation_id).await
    }

    async fn set_mode(
        &self,
        conversation_id: &str,
        mode: ConversationMode,
    ) -> Result<(), FaqdeskError> {
        queries::conversations::set_mode(&self.db, conversation_id, mode).await
    }
}

/// Handoff ticket persistence backed by SQLite.
pub struct SqliteTicketStore {
    db: Database,
}

impl SqliteTicketStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketStore for SqliteTicketStore {
    async fn find_pending(
        &self,
        conversation_id: &str,
    ) -> Result<Option<HandoffTicket>, FaqdeskError> {
        queries::tickets::find_pending(&self.db, conversation_id).await
    }

    async fn create_if_absent(
        &self,
        conversation_id: &str,
        name: &str,
        phone: &str,
        problem_summary: &str,
    ) -> Result<(bool, HandoffTicket), FaqdeskError> {
        queries::tickets::create_if_absent(&self.db, conversation_id, name, phone, problem_summary)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn adapters_share_one_database() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();

        let corpus = SqliteCorpus::new(db.clone());
        let conversations = SqliteConversationStore::new(db.clone());
        let tickets = SqliteTicketStore::new(db.clone());

        assert!(corpus.entries().await.unwrap().is_empty());

        let conversation = conversations.get_or_create("sess-1", "en").await.unwrap();
        conversations
            .append_turn(&conversation.id, "hello", true)
            .await
            .unwrap();
        assert_eq!(
            conversations
                .recent_turns(&conversation.id, 5)
                .await
                .unwrap()
                .len(),
            1
        );

        let (created, _) = tickets
            .create_if_absent(&conversation.id, "Jo", "+1", "stuck")
            .await
            .unwrap();
        assert!(created);

        db.close().await.unwrap();
    }
}
