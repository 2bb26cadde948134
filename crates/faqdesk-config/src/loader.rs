// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./faqdesk.toml` > `~/.config/faqdesk/faqdesk.toml`
//! > `/etc/faqdesk/faqdesk.toml` with environment variable overrides via the
//! `FAQDESK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::FaqdeskConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/faqdesk/faqdesk.toml` (system-wide)
/// 3. `~/.config/faqdesk/faqdesk.toml` (user XDG config)
/// 4. `./faqdesk.toml` (local directory)
/// 5. `FAQDESK_*` environment variables
pub fn load_config() -> Result<FaqdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FaqdeskConfig::default()))
        .merge(Toml::file("/etc/faqdesk/faqdesk.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("faqdesk/faqdesk.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("faqdesk.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Useful for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<FaqdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FaqdeskConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FaqdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FaqdeskConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `FAQDESK_NOTIFY_SMTP_HOST` must map to
/// `notify.smtp_host`, not `notify.smtp.host`.
fn env_provider() -> Env {
    Env::prefixed("FAQDESK_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("matcher_", "matcher.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("notify_", "notify.", 1);
        mapped.into()
    })
}
