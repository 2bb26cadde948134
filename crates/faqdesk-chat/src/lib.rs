// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation orchestration for the Faqdesk assistant.
//!
//! [`ChatService`] drives the per-message state machine (normal Q&A vs.
//! handoff-detail collection) and the deduplicated handoff intake. It
//! talks to storage, the corpus, and the notifier only through the traits
//! in `faqdesk-core`.

pub mod handoff;
pub mod locks;
pub mod orchestrator;

pub use orchestrator::{COLLECT_DETAILS_PROMPT, ChatService};
