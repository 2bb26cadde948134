// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: threshold ordering, blend weight sums, address syntax.

use crate::diagnostic::ConfigError;
use crate::model::FaqdeskConfig;

/// Tolerance when checking that the similarity blend weights sum to 1.
const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &FaqdeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let m = &config.matcher;

    if !(0.0..=1.0).contains(&m.keyword_weight) {
        errors.push(ConfigError::Validation {
            message: format!(
                "matcher.keyword_weight must be within [0, 1], got {}",
                m.keyword_weight
            ),
        });
    }

    if m.intent_boost < 1.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "matcher.intent_boost must be at least 1.0, got {}",
                m.intent_boost
            ),
        });
    }

    for (name, value) in [
        ("accept_threshold", m.accept_threshold),
        ("direct_threshold", m.direct_threshold),
        ("clarify_threshold", m.clarify_threshold),
    ] {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ConfigError::Validation {
                message: format!("matcher.{name} must be within [0, 1], got {value}"),
            });
        }
    }

    if m.clarify_threshold > m.direct_threshold {
        errors.push(ConfigError::Validation {
            message: format!(
                "matcher.clarify_threshold ({}) must not exceed matcher.direct_threshold ({})",
                m.clarify_threshold, m.direct_threshold
            ),
        });
    }

    if m.accept_threshold < m.clarify_threshold {
        errors.push(ConfigError::Validation {
            message: format!(
                "matcher.accept_threshold ({}) below matcher.clarify_threshold ({}) \
                 would accept candidates no response tier can use",
                m.accept_threshold, m.clarify_threshold
            ),
        });
    }

    let weight_sum = m.token_sort_weight + m.partial_weight + m.token_set_weight;
    if (weight_sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
        errors.push(ConfigError::Validation {
            message: format!(
                "matcher similarity weights must sum to 1.0, got {weight_sum} \
                 (token_sort {} + partial {} + token_set {})",
                m.token_sort_weight, m.partial_weight, m.token_set_weight
            ),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    let host = config.gateway.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("gateway.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.notify.sms_enabled && config.notify.agent_phone.is_none() {
        errors.push(ConfigError::Validation {
            message: "notify.sms_enabled requires notify.agent_phone to be set".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
