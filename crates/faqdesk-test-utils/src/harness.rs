// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles a complete chat stack: temp SQLite database,
//! SQLite stores, a static corpus, a recording notifier, and the
//! `ChatService` wired through them. Provides `send_message()` and
//! `submit_details()` to drive the full pipeline in tests.

use std::sync::Arc;

use faqdesk_chat::ChatService;
use faqdesk_config::model::MatcherConfig;
use faqdesk_core::types::{ChatReply, FaqEntry, HandoffReceipt};
use faqdesk_core::{ConversationStore, FaqdeskError, TicketStore};
use faqdesk_storage::{Database, SqliteConversationStore, SqliteTicketStore};

use crate::corpus::StaticCorpus;
use crate::notifier::RecordingNotifier;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    corpus: Vec<FaqEntry>,
    matcher_config: MatcherConfig,
    failing_notifier: bool,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            corpus: Vec::new(),
            matcher_config: MatcherConfig::default(),
            failing_notifier: false,
        }
    }

    /// Set the FAQ corpus served to the match engine.
    pub fn with_corpus(mut self, corpus: Vec<FaqEntry>) -> Self {
        self.corpus = corpus;
        self
    }

    /// Override matcher weights/thresholds.
    pub fn with_matcher_config(mut self, config: MatcherConfig) -> Self {
        self.matcher_config = config;
        self
    }

    /// Make every notification delivery fail.
    pub fn with_failing_notifier(mut self) -> Self {
        self.failing_notifier = true;
        self
    }

    /// Build the harness, creating the temp database and all stores.
    pub async fn build(self) -> Result<TestHarness, FaqdeskError> {
        let temp_dir = tempfile::TempDir::new().map_err(|e| FaqdeskError::Storage {
            source: Box::new(e),
        })?;
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let db = Database::open(&db_path_str).await?;

        let conversations = Arc::new(SqliteConversationStore::new(db.clone()));
        let tickets = Arc::new(SqliteTicketStore::new(db.clone()));
        let notifier = Arc::new(if self.failing_notifier {
            RecordingNotifier::failing()
        } else {
            RecordingNotifier::new()
        });

        let chat = ChatService::new(
            Arc::new(StaticCorpus::new(self.corpus)),
            conversations.clone(),
            tickets.clone(),
            notifier.clone(),
            self.matcher_config,
        );

        Ok(TestHarness {
            chat,
            conversations,
            tickets,
            notifier,
            db,
            _temp_dir: temp_dir,
        })
    }
}

/// A fully wired chat stack over a temp database.
pub struct TestHarness {
    pub chat: ChatService,
    pub conversations: Arc<SqliteConversationStore>,
    pub tickets: Arc<SqliteTicketStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub db: Database,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Start building a harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Drive one message through the full pipeline.
    pub async fn send_message(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<ChatReply, FaqdeskError> {
        self.chat.handle_user_message(session_id, "en", text).await
    }

    /// Submit handoff details for a session.
    pub async fn submit_details(
        &self,
        session_id: &str,
        name: &str,
        phone: &str,
        problem_summary: &str,
    ) -> Result<HandoffReceipt, FaqdeskError> {
        self.chat
            .submit_handoff_details(session_id, name, phone, problem_summary)
            .await
    }

    /// Pending ticket for a session's conversation, if any.
    pub async fn pending_ticket(
        &self,
        session_id: &str,
    ) -> Result<Option<faqdesk_core::types::HandoffTicket>, FaqdeskError> {
        match self.conversations.find_by_session(session_id).await? {
            Some(conversation) => self.tickets.find_pending(&conversation.id).await,
            None => Ok(None),
        }
    }
}
