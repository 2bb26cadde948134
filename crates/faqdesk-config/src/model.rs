// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Faqdesk assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Faqdesk configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FaqdeskConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Matching engine weights, thresholds, and word lists.
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Agent notification settings.
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "faqdesk".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Matching engine configuration.
///
/// The weights and thresholds are design constants with fixed defaults;
/// they are injected here rather than hard-coded so tests and deployments
/// can vary them without touching the algorithms.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MatcherConfig {
    /// Share of the combined score contributed by keyword overlap.
    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: f64,

    /// Multiplier applied when the query contains an intent-marker word.
    #[serde(default = "default_intent_boost")]
    pub intent_boost: f64,

    /// Minimum combined score for the engine to accept a candidate at all.
    #[serde(default = "default_accept_threshold")]
    pub accept_threshold: f64,

    /// Combined score at or above which the answer is returned directly.
    #[serde(default = "default_direct_threshold")]
    pub direct_threshold: f64,

    /// Combined score at or above which a clarification is offered.
    #[serde(default = "default_clarify_threshold")]
    pub clarify_threshold: f64,

    /// Blend weight of the token-sort similarity component.
    #[serde(default = "default_token_sort_weight")]
    pub token_sort_weight: f64,

    /// Blend weight of the partial-containment similarity component.
    #[serde(default = "default_partial_weight")]
    pub partial_weight: f64,

    /// Blend weight of the token-set similarity component.
    #[serde(default = "default_token_set_weight")]
    pub token_set_weight: f64,

    /// Additional stop words merged into the built-in English list.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            keyword_weight: default_keyword_weight(),
            intent_boost: default_intent_boost(),
            accept_threshold: default_accept_threshold(),
            direct_threshold: default_direct_threshold(),
            clarify_threshold: default_clarify_threshold(),
            token_sort_weight: default_token_sort_weight(),
            partial_weight: default_partial_weight(),
            token_set_weight: default_token_set_weight(),
            extra_stop_words: Vec::new(),
        }
    }
}

fn default_keyword_weight() -> f64 {
    0.3
}

fn default_intent_boost() -> f64 {
    1.1
}

fn default_accept_threshold() -> f64 {
    0.7
}

fn default_direct_threshold() -> f64 {
    0.7
}

fn default_clarify_threshold() -> f64 {
    0.6
}

fn default_token_sort_weight() -> f64 {
    0.4
}

fn default_partial_weight() -> f64 {
    0.3
}

fn default_token_set_weight() -> f64 {
    0.3
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("faqdesk").join("faqdesk.db"))
        .and_then(|p| p.to_str().map(str::to_string))
        .unwrap_or_else(|| "faqdesk.db".to_string())
}

fn default_wal_mode() -> bool {
    true
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_gateway_port")]
    pub port: u16,

    /// Bearer token required on /v1 routes. `None` leaves the customer
    /// widget API open.
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
            bearer_token: None,
        }
    }
}

fn default_gateway_host() -> String {
    "127.0.0.1".to_string()
}

fn default_gateway_port() -> u16 {
    8080
}

/// Agent notification configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    /// Email address of the human agent team. `None` disables email
    /// notifications (ticket creation still succeeds).
    #[serde(default)]
    pub admin_email: Option<String>,

    /// SMTP relay hostname.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username. `None` sends unauthenticated.
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password.
    #[serde(default)]
    pub smtp_password: Option<String>,

    /// From address on outgoing notification mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Log-only SMS alert toggle.
    #[serde(default)]
    pub sms_enabled: bool,

    /// Agent phone number for the SMS alert.
    #[serde(default)]
    pub agent_phone: Option<String>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            admin_email: None,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            from_address: default_from_address(),
            sms_enabled: false,
            agent_phone: None,
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@faqdesk.local".to_string()
}
