// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `import-faqs` subcommand: load corpus entries from a JSON file.
//!
//! Records are upserted by question text, so re-running an import updates
//! answers and keywords in place instead of duplicating entries.

use std::path::Path;

use serde::Deserialize;

use faqdesk_config::FaqdeskConfig;
use faqdesk_core::FaqdeskError;
use faqdesk_core::types::FaqEntry;
use faqdesk_storage::{Database, queries};

/// Keywords may be declared as a JSON list or a comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeywordsField {
    List(Vec<String>),
    Csv(String),
}

impl KeywordsField {
    fn into_vec(self) -> Vec<String> {
        match self {
            KeywordsField::List(list) => list
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            KeywordsField::Csv(csv) => csv
                .split(',')
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

/// One record of the import file.
#[derive(Debug, Deserialize)]
struct ImportRecord {
    question: String,
    #[serde(default)]
    answer: String,
    #[serde(default)]
    keywords: Option<KeywordsField>,
    #[serde(default)]
    category: String,
}

/// Import FAQ entries from `file` into the configured database.
pub async fn run(config: &FaqdeskConfig, file: &Path) -> Result<(), FaqdeskError> {
    let content = std::fs::read_to_string(file).map_err(|e| {
        FaqdeskError::InvalidInput(format!("cannot read {}: {e}", file.display()))
    })?;
    let records: Vec<ImportRecord> = serde_json::from_str(&content).map_err(|e| {
        FaqdeskError::InvalidInput(format!("{} is not a valid FAQ file: {e}", file.display()))
    })?;

    let db = Database::open(&config.storage.database_path).await?;

    let total = records.len();
    let mut imported = 0;
    for record in records {
        let entry = FaqEntry {
            id: uuid::Uuid::new_v4().to_string(),
            question: record.question,
            answer: record.answer,
            keywords: record.keywords.map(KeywordsField::into_vec).unwrap_or_default(),
            category: record.category,
        };
        if queries::faqs::upsert_faq(&db, &entry).await? {
            imported += 1;
        }
    }

    let count = queries::faqs::count_faqs(&db).await?;
    db.close().await?;

    println!("Imported {imported} new FAQs from {total} records");
    println!("Total FAQs in database: {count}");
    Ok(())
}
