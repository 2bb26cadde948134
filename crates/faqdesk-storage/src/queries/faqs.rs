// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! FAQ corpus operations.
//!
//! The corpus is read-mostly: the importer upserts entries keyed by
//! question text; the match engine reads the full set in insertion order.

use faqdesk_core::FaqdeskError;
use faqdesk_core::types::FaqEntry;
use rusqlite::params;

use crate::database::{Database, map_tr_err, now_timestamp};

/// List the full corpus in insertion (rowid) order.
///
/// The stable order matters: the match engine's tie-break keeps the
/// earliest-registered entry.
pub async fn list_faqs(db: &Database) -> Result<Vec<FaqEntry>, FaqdeskError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, question, answer, keywords, category
                 FROM faqs ORDER BY rowid ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                let keywords_json: String = row.get(3)?;
                Ok(FaqEntry {
                    id: row.get(0)?,
                    question: row.get(1)?,
                    answer: row.get(2)?,
                    keywords: serde_json::from_str(&keywords_json).unwrap_or_default(),
                    category: row.get(4)?,
                })
            })?;
            let mut faqs = Vec::new();
            for row in rows {
                faqs.push(row?);
            }
            Ok(faqs)
        })
        .await
        .map_err(map_tr_err)
}

/// Insert a FAQ entry, or update answer/keywords/category when an entry
/// with the same question already exists. Returns `true` when a new row
/// was created.
pub async fn upsert_faq(db: &Database, faq: &FaqEntry) -> Result<bool, FaqdeskError> {
    let faq = faq.clone();
    let keywords_json = serde_json::to_string(&faq.keywords).map_err(|e| {
        FaqdeskError::Storage {
            source: Box::new(e),
        }
    })?;
    let now = now_timestamp();
    db.connection()
        .call(move |conn| {
            let existing: Option<String> = conn
                .query_row(
                    "SELECT id FROM faqs WHERE question = ?1",
                    params![faq.question],
                    |row| row.get(0),
                )
                .map(Some)
                .or_else(|e| match e {
                    rusqlite::Error::QueryReturnedNoRows => Ok(None),
                    other => Err(other),
                })?;

            match existing {
                Some(id) => {
                    conn.execute(
                        "UPDATE faqs SET answer = ?1, keywords = ?2, category = ?3,
                         updated_at = ?4 WHERE id = ?5",
                        params![faq.answer, keywords_json, faq.category, now, id],
                    )?;
                    Ok(false)
                }
                None => {
                    conn.execute(
                        "INSERT INTO faqs (id, question, answer, keywords, category,
                         created_at, updated_at)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                        params![faq.id, faq.question, faq.answer, keywords_json, faq.category, now],
                    )?;
                    Ok(true)
                }
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Total number of corpus entries.
pub async fn count_faqs(db: &Database) -> Result<i64, FaqdeskError> {
    db.connection()
        .call(|conn| {
            let n = conn.query_row("SELECT COUNT(*) FROM faqs", [], |row| row.get(0))?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn make_faq(id: &str, question: &str) -> FaqEntry {
        FaqEntry {
            id: id.to_string(),
            question: question.to_string(),
            answer: "An answer.".to_string(),
            keywords: vec!["service".to_string(), "astrology".to_string()],
            category: "General".to_string(),
        }
    }

    #[tokio::test]
    async fn upsert_and_list_round_trips() {
        let (db, _dir) = setup_db().await;

        let created = upsert_faq(&db, &make_faq("f1", "What is your service?"))
            .await
            .unwrap();
        assert!(created);

        let faqs = list_faqs(&db).await.unwrap();
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].id, "f1");
        assert_eq!(faqs[0].question, "What is your service?");
        assert_eq!(faqs[0].keywords, vec!["service", "astrology"]);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn upsert_same_question_updates_in_place() {
        let (db, _dir) = setup_db().await;

        upsert_faq(&db, &make_faq("f1", "What is your service?"))
            .await
            .unwrap();

        let mut updated = make_faq("f2", "What is your service?");
        updated.answer = "A newer answer.".to_string();
        let created = upsert_faq(&db, &updated).await.unwrap();
        assert!(!created);

        let faqs = list_faqs(&db).await.unwrap();
        assert_eq!(faqs.len(), 1);
        // Original id is kept; content is updated.
        assert_eq!(faqs[0].id, "f1");
        assert_eq!(faqs[0].answer, "A newer answer.");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let (db, _dir) = setup_db().await;

        for (id, q) in [("a", "First?"), ("b", "Second?"), ("c", "Third?")] {
            upsert_faq(&db, &make_faq(id, q)).await.unwrap();
        }

        let faqs = list_faqs(&db).await.unwrap();
        let ids: Vec<&str> = faqs.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(count_faqs(&db).await.unwrap(), 3);

        db.close().await.unwrap();
    }
}
