// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text normalization for matching.
//!
//! Every string that enters the similarity pipeline passes through
//! [`normalize`] first, so scoring never sees case, punctuation, or
//! whitespace variance.

/// Normalize text for matching: lowercase, replace every character that is
/// not a letter, digit, or whitespace with a space, then collapse
/// whitespace runs to single spaces and trim.
///
/// Pure and deterministic. Idempotent: `normalize(normalize(x)) ==
/// normalize(x)` for all inputs. Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("What Is ASTROLOGY???"), "what is astrology");
    }

    #[test]
    fn collapses_interior_whitespace() {
        assert_eq!(normalize("  hello,\t\tworld!  "), "hello world");
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!...,"), "");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize("Call +1 (800) 555-0199"), "call 1 800 555 0199");
    }

    #[test]
    fn handles_unicode_letters() {
        assert_eq!(normalize("Café-Zeit!"), "café zeit");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC{0,64}") {
            let once = normalize(&s);
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_has_no_punctuation_or_double_spaces(s in "\\PC{0,64}") {
            let out = normalize(&s);
            prop_assert!(out.chars().all(|c| c.is_alphanumeric() || c == ' '));
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(out.trim(), &out);
        }
    }
}
