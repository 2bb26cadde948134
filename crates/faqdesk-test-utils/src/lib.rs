// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the Faqdesk workspace.
//!
//! Provides mock collaborators and a full-stack [`TestHarness`] used by
//! the end-to-end tests in the `faqdesk` binary crate.

pub mod corpus;
pub mod harness;
pub mod notifier;

pub use corpus::StaticCorpus;
pub use harness::{TestHarness, TestHarnessBuilder};
pub use notifier::RecordingNotifier;
