// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session serialization.
//!
//! Two concurrent requests for the same session race on "read recent
//! turns, decide mode, append new turns". The orchestrator serializes
//! per session id with a keyed async mutex rather than accepting eventual
//! inconsistency in the handoff-reply heuristic.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Keyed async mutexes, one per session id.
#[derive(Default)]
pub struct SessionLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a session, creating it on first use.
    pub async fn acquire(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}
