// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use faqdesk_chat::ChatService;
use faqdesk_core::FaqdeskError;

use crate::auth::{AuthConfig, auth_middleware};
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The conversation service all handlers delegate to.
    pub chat: Arc<ChatService>,
    /// Process start time for uptime reporting.
    pub start_time: std::time::Instant,
}

/// Gateway server configuration (mirrors GatewayConfig from faqdesk-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Bearer token for /v1 auth (None = open customer widget API).
    pub bearer_token: Option<String>,
}

/// Build the gateway router.
///
/// Routes:
/// - `GET /health` (always unauthenticated)
/// - `POST /v1/chat`, `POST /v1/handoff`, `GET /v1/conversations/{id}`
///   (bearer auth when configured)
pub fn build_router(config: &ServerConfig, chat: Arc<ChatService>) -> Router {
    let state = GatewayState {
        chat,
        start_time: std::time::Instant::now(),
    };
    let auth_state = AuthConfig {
        bearer_token: config.bearer_token.clone(),
    };

    let public_routes = Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route("/v1/chat", post(handlers::post_chat))
        .route("/v1/handoff", post(handlers::post_handoff))
        .route(
            "/v1/conversations/{session_id}",
            get(handlers::get_conversation),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server and serve until the task is aborted.
pub async fn start_server(
    config: &ServerConfig,
    chat: Arc<ChatService>,
) -> Result<(), FaqdeskError> {
    let app = build_router(config, chat);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FaqdeskError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| FaqdeskError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_debug_prints_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            bearer_token: None,
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("127.0.0.1"));
        assert!(debug.contains("8080"));
    }
}
