// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Faqdesk assistant.
//!
//! This crate provides the shared error type, the domain model, and the
//! collaborator traits the orchestration core uses to talk to storage,
//! the corpus, and the notifier. All adapter crates implement traits
//! defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FaqdeskError;
pub use types::{
    ChatReply, Conversation, ConversationMode, FaqEntry, HandoffReceipt, HandoffTicket,
    MatchResult, ResponseKind, TicketStatus, Turn,
};

// Re-export all collaborator traits at crate root.
pub use traits::{ConversationStore, CorpusProvider, Notifier, TicketStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_construct() {
        let _config = FaqdeskError::Config("test".into());
        let _storage = FaqdeskError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _input = FaqdeskError::InvalidInput("empty".into());
        let _session = FaqdeskError::UnknownSession("s-1".into());
        let _validation = FaqdeskError::validation("phone", "not a number");
        let _notify = FaqdeskError::Notify {
            message: "smtp down".into(),
            source: None,
        };
        let _internal = FaqdeskError::Internal("test".into());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = FaqdeskError::validation("phone", "must contain only digits");
        assert_eq!(
            err.to_string(),
            "validation failed for phone: must contain only digits"
        );
    }

    #[test]
    fn trait_objects_are_constructible() {
        // Compile-time check that all collaborator traits stay object-safe.
        fn _corpus(_: &dyn CorpusProvider) {}
        fn _conversations(_: &dyn ConversationStore) {}
        fn _tickets(_: &dyn TicketStore) {}
        fn _notifier(_: &dyn Notifier) {}
    }
}
