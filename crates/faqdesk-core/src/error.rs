// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Faqdesk assistant.
//!
//! Every failure in the core is scoped to a single request; none is fatal
//! to the process. Callers map variants onto transport-level responses.

use thiserror::Error;

/// The primary error type used across all Faqdesk crates.
#[derive(Debug, Error)]
pub enum FaqdeskError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The request was rejected before reaching any business logic.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No conversation exists for the given session id.
    #[error("unknown session: {0}")]
    UnknownSession(String),

    /// A submitted field failed validation.
    #[error("validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    /// Notification delivery errors. Advisory only -- never rolls back state.
    #[error("notification error: {message}")]
    Notify {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FaqdeskError {
    /// Convenience constructor for field-scoped validation failures.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
