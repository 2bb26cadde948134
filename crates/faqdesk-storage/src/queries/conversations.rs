// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation CRUD operations.

use faqdesk_core::FaqdeskError;
use faqdesk_core::types::{Conversation, ConversationMode};
use rusqlite::params;

use crate::database::{Database, map_tr_err, now_timestamp};

fn row_to_conversation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Conversation> {
    let mode: String = row.get(3)?;
    Ok(Conversation {
        id: row.get(0)?,
        session_id: row.get(1)?,
        language: row.get(2)?,
        mode: mode.parse().unwrap_or_default(),
        created_at: row.get(4)?,
        last_active_at: row.get(5)?,
    })
}

const SELECT_COLUMNS: &str =
    "id, session_id, language, mode, created_at, last_active_at";

/// Fetch the conversation for a session, creating it on first contact.
/// Updates `last_active_at` on every call.
pub async fn get_or_create(
    db: &Database,
    session_id: &str,
    language: &str,
) -> Result<Conversation, FaqdeskError> {
    let session_id = session_id.to_string();
    let language = language.to_string();
    let new_id = uuid::Uuid::new_v4().to_string();
    let now = now_timestamp();
    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;

            let updated = tx.execute(
                "UPDATE conversations SET last_active_at = ?1 WHERE session_id = ?2",
                params![now, session_id],
            )?;
            if updated == 0 {
                tx.execute(
                    "INSERT INTO conversations
                     (id, session_id, language, mode, created_at, last_active_at)
                     VALUES (?1, ?2, ?3, 'normal', ?4, ?4)",
                    params![new_id, session_id, language, now],
                )?;
            }

            let conversation = tx.query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM conversations WHERE session_id = ?1"),
                params![session_id],
                row_to_conversation,
            )?;
            tx.commit()?;
            Ok(conversation)
        })
        .await
        .map_err(map_tr_err)
}

/// Fetch a conversation by session id without creating one.
pub async fn find_by_session(
    db: &Database,
    session_id: &str,
) -> Result<Option<Conversation>, FaqdeskError> {
    let session_id = session_id.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM conversations WHERE session_id = ?1"),
                params![session_id],
                row_to_conversation,
            );
            match result {
                Ok(conversation) => Ok(Some(conversation)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Persist the orchestrator mode for a conversation.
pub async fn set_mode(
    db: &Database,
    conversation_id: &str,
    mode: ConversationMode,
) -> Result<(), FaqdeskError> {
    let conversation_id = conversation_id.to_string();
    let mode = mode.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE conversations SET mode = ?1 WHERE id = ?2",
                params![mode, conversation_id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}
