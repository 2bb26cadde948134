// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn (message history) operations.
//!
//! Turns are append-only. Ordering is `(created_at, rowid)` so turns
//! appended within the same millisecond keep a stable order.

use faqdesk_core::FaqdeskError;
use faqdesk_core::types::Turn;
use rusqlite::params;

use crate::database::{Database, map_tr_err, now_timestamp};

fn row_to_turn(row: &rusqlite::Row<'_>) -> rusqlite::Result<Turn> {
    let is_user: i64 = row.get(3)?;
    Ok(Turn {
        id: row.get(0)?,
        conversation_id: row.get(1)?,
        content: row.get(2)?,
        is_user: is_user != 0,
        created_at: row.get(4)?,
    })
}

/// Append a turn to a conversation's history.
pub async fn append_turn(
    db: &Database,
    conversation_id: &str,
    content: &str,
    is_user: bool,
) -> Result<Turn, FaqdeskError> {
    let turn = Turn {
        id: uuid::Uuid::new_v4().to_string(),
        conversation_id: conversation_id.to_string(),
        content: content.to_string(),
        is_user,
        created_at: now_timestamp(),
    };
    let inserted = turn.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO turns (id, conversation_id, content, is_user, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    inserted.id,
                    inserted.conversation_id,
                    inserted.content,
                    inserted.is_user as i64,
                    inserted.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;
    Ok(turn)
}

/// Up to `limit` turns for a conversation, newest first.
pub async fn recent_turns(
    db: &Database,
    conversation_id: &str,
    limit: u32,
) -> Result<Vec<Turn>, FaqdeskError> {
    let conversation_id = conversation_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, conversation_id, content, is_user, created_at
                 FROM turns WHERE conversation_id = ?1
                 ORDER BY created_at DESC, rowid DESC LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![conversation_id, limit], row_to_turn)?;
            let mut turns = Vec::new();
            for row in rows {
                turns.push(row?);
            }
            Ok(turns)
        })
        .await
        .map_err(map_tr_err)
}

/// Full history for a conversation, oldest first.
pub async fn history(db: &Database, conversation_id: &str) -> Result<Vec<Turn>, FaqdeskError> {
    let conversation_id = conversation_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, conversation_id, content, is_user, created_at
                 FROM turns WHERE conversation_id = ?1
                 ORDER BY created_at ASC, rowid ASC",
            )?;
            let rows = stmt.query_map(params![conversation_id], row_to_turn)?;
            let mut turns = Vec::new();
            for row in rows {
                turns.push(row?);
            }
            Ok(turns)
        })
        .await
        .map_err(map_tr_err)
}
