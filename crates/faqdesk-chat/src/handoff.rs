// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handoff-detail validation.
//!
//! Field checks run before any storage access; failures are field-scoped
//! so the transport layer can point at the offending input.

use faqdesk_core::FaqdeskError;

/// Validate the handoff submission fields.
///
/// The phone rule is deliberately loose: digits and spaces with an
/// optional leading `+`. Anything stricter rejects real numbers.
pub fn validate_details(
    name: &str,
    phone: &str,
    problem_summary: &str,
) -> Result<(), FaqdeskError> {
    if name.trim().is_empty() {
        return Err(FaqdeskError::validation("name", "name is required"));
    }
    if problem_summary.trim().is_empty() {
        return Err(FaqdeskError::validation(
            "problem_summary",
            "a brief summary of the issue is required",
        ));
    }
    if !is_valid_phone(phone) {
        return Err(FaqdeskError::validation(
            "phone",
            "please enter a valid phone number",
        ));
    }
    Ok(())
}

/// Digits and spaces, optionally prefixed with `+`, containing at least
/// one digit.
fn is_valid_phone(phone: &str) -> bool {
    let trimmed = phone.trim();
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    !rest.chars().all(|c| c == ' ')
        && !rest.is_empty()
        && rest.chars().all(|c| c.is_ascii_digit() || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_phone_formats() {
        for phone in ["+1234567890", "1234567890", "+1 234 567 890", "044 2345 6789"] {
            assert!(is_valid_phone(phone), "rejected {phone:?}");
        }
    }

    #[test]
    fn rejects_malformed_phones() {
        for phone in ["", "   ", "+", "123-456", "call me", "12a34", "++123"] {
            assert!(!is_valid_phone(phone), "accepted {phone:?}");
        }
    }

    #[test]
    fn validation_errors_are_field_scoped() {
        let err = validate_details("John", "not-a-number", "issue").unwrap_err();
        assert!(matches!(
            err,
            FaqdeskError::Validation { ref field, .. } if field == "phone"
        ));

        let err = validate_details("", "+123", "issue").unwrap_err();
        assert!(matches!(
            err,
            FaqdeskError::Validation { ref field, .. } if field == "name"
        ));

        let err = validate_details("John", "+123", " ").unwrap_err();
        assert!(matches!(
            err,
            FaqdeskError::Validation { ref field, .. } if field == "problem_summary"
        ));
    }

    #[test]
    fn valid_details_pass() {
        assert!(validate_details("John Doe", "+1234567890", "Cannot book").is_ok());
    }
}
