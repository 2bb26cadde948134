// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions for the Faqdesk core.
//!
//! The matching and orchestration logic talks to its surroundings only
//! through these seams. All traits use `#[async_trait]` for dynamic
//! dispatch compatibility.

pub mod conversation;
pub mod corpus;
pub mod notify;
pub mod ticket;

pub use conversation::ConversationStore;
pub use corpus::CorpusProvider;
pub use notify::Notifier;
pub use ticket::TicketStore;
