// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handoff ticket operations.
//!
//! The at-most-one-pending-per-conversation invariant is enforced twice:
//! the conditional insert runs inside a transaction on the single writer
//! thread, and the partial unique index on `(conversation_id) WHERE
//! status = 'pending'` backstops any path that bypasses it.

use faqdesk_core::FaqdeskError;
use faqdesk_core::types::{HandoffTicket, TicketStatus};
use rusqlite::params;

use crate::database::{Database, map_tr_err, now_timestamp};

fn row_to_ticket(row: &rusqlite::Row<'_>) -> rusqlite::Result<HandoffTicket> {
    let status: String = row.get(5)?;
    Ok(HandoffTicket {
        id: row.get(0)?,
        conversation_id: row.get(1)?,
        name: row.get(2)?,
        phone: row.get(3)?,
        problem_summary: row.get(4)?,
        status: status.parse().unwrap_or(TicketStatus::Pending),
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

const SELECT_COLUMNS: &str =
    "id, conversation_id, name, phone, problem_summary, status, created_at, updated_at";

/// The pending ticket for a conversation, if any.
pub async fn find_pending(
    db: &Database,
    conversation_id: &str,
) -> Result<Option<HandoffTicket>, FaqdeskError> {
    let conversation_id = conversation_id.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!(
                    "SELECT {SELECT_COLUMNS} FROM tickets
                     WHERE conversation_id = ?1 AND status = 'pending'"
                ),
                params![conversation_id],
                row_to_ticket,
            );
            match result {
                Ok(ticket) => Ok(Some(ticket)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Create a pending ticket unless the conversation already has one.
///
/// Returns `(true, ticket)` on creation, `(false, existing)` when a
/// pending ticket was already queued. The check-then-insert runs in one
/// transaction; a constraint violation from a concurrent writer resolves
/// to the existing ticket rather than an error.
pub async fn create_if_absent(
    db: &Database,
    conversation_id: &str,
    name: &str,
    phone: &str,
    problem_summary: &str,
) -> Result<(bool, HandoffTicket), FaqdeskError> {
    let conversation_id = conversation_id.to_string();
    let name = name.to_string();
    let phone = phone.to_string();
    let problem_summary = problem_summary.to_string();
    let new_id = uuid::Uuid::new_v4().to_string();
    let now = now_timestamp();
    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;

            let select_pending = format!(
                "SELECT {SELECT_COLUMNS} FROM tickets
                 WHERE conversation_id = ?1 AND status = 'pending'"
            );

            let existing = tx
                .query_row(&select_pending, params![conversation_id], row_to_ticket)
                .map(Some)
                .or_else(|e| match e {
                    rusqlite::Error::QueryReturnedNoRows => Ok(None),
                    other => Err(other),
                })?;

            if let Some(ticket) = existing {
                tx.commit()?;
                return Ok((false, ticket));
            }

            let insert = tx.execute(
                "INSERT INTO tickets
                 (id, conversation_id, name, phone, problem_summary, status,
                  created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, 'pending', ?6, ?6)",
                params![new_id, conversation_id, name, phone, problem_summary, now],
            );

            match insert {
                Ok(_) => {
                    let ticket = tx.query_row(
                        &format!("SELECT {SELECT_COLUMNS} FROM tickets WHERE id = ?1"),
                        params![new_id],
                        row_to_ticket,
                    )?;
                    tx.commit()?;
                    Ok((true, ticket))
                }
                // Unique-index race: another writer created the pending
                // ticket between our check and insert.
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    let ticket =
                        tx.query_row(&select_pending, params![conversation_id], row_to_ticket)?;
                    tx.commit()?;
                    Ok((false, ticket))
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Advance a ticket's status (driven by the external agent workflow).
pub async fn update_status(
    db: &Database,
    ticket_id: &str,
    status: TicketStatus,
) -> Result<(), FaqdeskError> {
    let ticket_id = ticket_id.to_string();
    let status = status.to_string();
    let now = now_timestamp();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE tickets SET status = ?1, updated_at = ?2 WHERE id = ?3",
                params![status, now, ticket_id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::conversations::get_or_create;
    use tempfile::tempdir;

    async fn setup_conversation() -> (Database, String, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        let conversation = get_or_create(&db, "sess-1", "en").await.unwrap();
        (db, conversation.id, dir)
    }

    #[tokio::test]
    async fn first_submission_creates_pending_ticket() {
        let (db, cid, _dir) = setup_conversation().await;

        let (created, ticket) =
            create_if_absent(&db, &cid, "John Doe", "+1234567890", "Cannot book")
                .await
                .unwrap();
        assert!(created);
        assert_eq!(ticket.status, TicketStatus::Pending);
        assert_eq!(ticket.name, "John Doe");

        let pending = find_pending(&db, &cid).await.unwrap().unwrap();
        assert_eq!(pending.id, ticket.id);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn second_submission_returns_existing_ticket() {
        let (db, cid, _dir) = setup_conversation().await;

        let (created, first) = create_if_absent(&db, &cid, "John", "+1", "Issue 1")
            .await
            .unwrap();
        assert!(created);

        let (created, second) = create_if_absent(&db, &cid, "Jane", "+2", "Issue 2")
            .await
            .unwrap();
        assert!(!created);
        assert_eq!(second.id, first.id);
        // Original submission details are preserved.
        assert_eq!(second.name, "John");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn resolved_ticket_allows_a_new_pending_one() {
        let (db, cid, _dir) = setup_conversation().await;

        let (_, first) = create_if_absent(&db, &cid, "John", "+1", "Issue 1")
            .await
            .unwrap();
        update_status(&db, &first.id, TicketStatus::Resolved)
            .await
            .unwrap();
        assert!(find_pending(&db, &cid).await.unwrap().is_none());

        let (created, second) = create_if_absent(&db, &cid, "John", "+1", "Issue 2")
            .await
            .unwrap();
        assert!(created);
        assert_ne!(second.id, first.id);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_submissions_create_exactly_one_ticket() {
        let (db, cid, _dir) = setup_conversation().await;

        let mut handles = Vec::new();
        for i in 0..10 {
            let db = db.clone();
            let cid = cid.clone();
            handles.push(tokio::spawn(async move {
                create_if_absent(&db, &cid, &format!("user {i}"), "+1", "race")
                    .await
                    .unwrap()
            }));
        }

        let mut created_count = 0;
        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            let (created, ticket) = handle.await.unwrap();
            if created {
                created_count += 1;
            }
            ids.insert(ticket.id);
        }
        assert_eq!(created_count, 1, "exactly one submission may create");
        assert_eq!(ids.len(), 1, "all submissions must see the same ticket");

        db.close().await.unwrap();
    }
}
