// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /v1/chat, POST /v1/handoff, GET /v1/conversations/{id},
//! GET /health.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use faqdesk_core::{FaqdeskError, ResponseKind};

use crate::server::GatewayState;

/// Request body for POST /v1/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message text.
    pub message: String,
    /// Session id; a fresh one is generated when absent.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Declared language tag; informational only.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Response body for POST /v1/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub response: String,
    pub response_kind: ResponseKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_category: Option<String>,
    /// ISO 8601 timestamp of the reply.
    pub timestamp: String,
}

/// Request body for POST /v1/handoff.
#[derive(Debug, Deserialize)]
pub struct HandoffRequest {
    pub session_id: String,
    pub name: String,
    pub phone: String,
    pub problem_summary: String,
}

/// Response body for POST /v1/handoff.
#[derive(Debug, Serialize)]
pub struct HandoffResponse {
    pub created: bool,
    pub already_queued: bool,
    pub ticket_id: String,
    pub reference: String,
    pub message: String,
}

/// One turn in the conversation history payload.
#[derive(Debug, Serialize)]
pub struct TurnPayload {
    pub id: String,
    pub content: String,
    pub is_user: bool,
    pub timestamp: String,
}

/// Response body for GET /v1/conversations/{session_id}.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub conversation_id: String,
    pub messages: Vec<TurnPayload>,
    pub total_messages: usize,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Confirmation shown when a new ticket is queued.
const SUBMITTED_MESSAGE: &str =
    "Your request has been submitted. A human agent will contact you within 24 hours.";

/// Confirmation shown when a pending ticket already exists.
const ALREADY_QUEUED_MESSAGE: &str =
    "Your request is already in queue. An agent will contact you shortly.";

/// Map a core error onto an HTTP response.
///
/// `UnknownSession` is a 404 only where the session id is the resource
/// being addressed (history lookup); on submissions it is a 400.
fn error_response(err: FaqdeskError, session_is_resource: bool) -> Response {
    let (status, field) = match &err {
        FaqdeskError::InvalidInput(_) => (StatusCode::BAD_REQUEST, None),
        FaqdeskError::Validation { field, .. } => {
            (StatusCode::BAD_REQUEST, Some(field.clone()))
        }
        FaqdeskError::UnknownSession(_) if session_is_resource => (StatusCode::NOT_FOUND, None),
        FaqdeskError::UnknownSession(_) => (StatusCode::BAD_REQUEST, None),
        _ => {
            tracing::error!(error = %err, "request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, None)
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            field,
        }),
    )
        .into_response()
}

/// POST /v1/chat
///
/// Routes a user message through the orchestrator and returns the reply.
pub async fn post_chat(
    State(state): State<GatewayState>,
    Json(body): Json<ChatRequest>,
) -> Response {
    let session_id = body
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("auto-{}", uuid::Uuid::new_v4()));

    match state
        .chat
        .handle_user_message(&session_id, &body.language, &body.message)
        .await
    {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse {
                session_id: reply.session_id,
                response: reply.response_text,
                response_kind: reply.response_kind,
                confidence: reply.confidence,
                matched_question: reply.matched_question,
                matched_category: reply.matched_category,
                timestamp: chrono::Utc::now().to_rfc3339(),
            }),
        )
            .into_response(),
        Err(err) => error_response(err, false),
    }
}

/// POST /v1/handoff
///
/// Accepts handoff contact details and queues (or re-reports) the ticket.
pub async fn post_handoff(
    State(state): State<GatewayState>,
    Json(body): Json<HandoffRequest>,
) -> Response {
    match state
        .chat
        .submit_handoff_details(&body.session_id, &body.name, &body.phone, &body.problem_summary)
        .await
    {
        Ok(receipt) => {
            let message = if receipt.created {
                SUBMITTED_MESSAGE
            } else {
                ALREADY_QUEUED_MESSAGE
            };
            (
                StatusCode::OK,
                Json(HandoffResponse {
                    created: receipt.created,
                    already_queued: receipt.already_queued,
                    ticket_id: receipt.ticket_id,
                    reference: receipt.reference,
                    message: message.to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => error_response(err, false),
    }
}

/// GET /v1/conversations/{session_id}
///
/// Returns the full turn history for a session, oldest first.
pub async fn get_conversation(
    State(state): State<GatewayState>,
    Path(session_id): Path<String>,
) -> Response {
    match state.chat.conversation_history(&session_id).await {
        Ok((conversation_id, turns)) => {
            let messages: Vec<TurnPayload> = turns
                .into_iter()
                .map(|t| TurnPayload {
                    id: t.id,
                    content: t.content,
                    is_user: t.is_user,
                    timestamp: t.created_at,
                })
                .collect();
            (
                StatusCode::OK,
                Json(HistoryResponse {
                    session_id,
                    conversation_id,
                    total_messages: messages.len(),
                    messages,
                }),
            )
                .into_response()
        }
        Err(err) => error_response(err, true),
    }
}

/// GET /health
///
/// Unauthenticated liveness endpoint.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
