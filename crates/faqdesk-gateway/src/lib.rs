// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway exposing the Faqdesk chat and handoff API.
//!
//! A thin axum layer over [`faqdesk_chat::ChatService`]: JSON in, JSON
//! out, optional bearer auth, permissive CORS for the embedded widget.
//! Each request is handled in one request-response cycle with no
//! background processing, so handlers call the service directly rather
//! than queueing.

pub mod auth;
pub mod handlers;
pub mod server;

pub use server::{ServerConfig, build_router, start_server};
