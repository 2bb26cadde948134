// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `serve` subcommand: wire storage, matcher, and gateway together
//! and run until interrupted.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use faqdesk_chat::ChatService;
use faqdesk_config::FaqdeskConfig;
use faqdesk_core::FaqdeskError;
use faqdesk_gateway::ServerConfig;
use faqdesk_notify::EmailNotifier;
use faqdesk_storage::{Database, SqliteConversationStore, SqliteCorpus, SqliteTicketStore};

/// Start the Faqdesk server with the given configuration.
pub async fn run(config: FaqdeskConfig) -> Result<(), FaqdeskError> {
    init_tracing(&config.agent.log_level);

    info!(
        name = %config.agent.name,
        db = %config.storage.database_path,
        "starting faqdesk"
    );

    let db = Database::open(&config.storage.database_path).await?;

    let chat = Arc::new(ChatService::new(
        Arc::new(SqliteCorpus::new(db.clone())),
        Arc::new(SqliteConversationStore::new(db.clone())),
        Arc::new(SqliteTicketStore::new(db.clone())),
        Arc::new(EmailNotifier::new(config.notify.clone())),
        config.matcher.clone(),
    ));

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
        bearer_token: config.gateway.bearer_token.clone(),
    };

    tokio::select! {
        result = faqdesk_gateway::start_server(&server_config, chat) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    db.close().await?;
    info!("faqdesk stopped");
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
