// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Faqdesk assistant.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a
//! single-writer concurrency model via `tokio-rusqlite`, typed CRUD query
//! modules, and adapters implementing the core collaborator traits.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use adapter::{SqliteConversationStore, SqliteCorpus, SqliteTicketStore};
pub use database::Database;
pub use models::*;
