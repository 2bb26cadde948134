// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the complete Faqdesk pipeline.
//!
//! Each test creates an isolated TestHarness with a temp SQLite database
//! and a static corpus. Tests are independent and order-insensitive.

use faqdesk_config::model::MatcherConfig;
use faqdesk_core::FaqdeskError;
use faqdesk_core::types::{ResponseKind, TicketStatus};
use faqdesk_test_utils::{StaticCorpus, TestHarness};

fn service_corpus() -> Vec<faqdesk_core::types::FaqEntry> {
    vec![
        StaticCorpus::entry(
            "svc",
            "What is your service?",
            "We provide astrology services.",
            &["service", "astrology"],
        ),
        StaticCorpus::entry(
            "chart",
            "How do I get a birth chart reading?",
            "You can book a reading through our website.",
            &["birth", "chart", "reading", "booking"],
        ),
    ]
}

// ---- Matching pipeline ----

#[tokio::test]
async fn confident_query_returns_faq_answer() {
    let harness = TestHarness::builder()
        .with_corpus(service_corpus())
        .build()
        .await
        .unwrap();

    let reply = harness
        .send_message("sess-1", "What service do you provide?")
        .await
        .unwrap();

    assert_eq!(reply.response_kind, ResponseKind::Faq);
    assert!(reply.confidence.unwrap() >= 0.7);
    assert_eq!(
        reply.matched_question.as_deref(),
        Some("What is your service?")
    );
}

#[tokio::test]
async fn unrelated_query_offers_escalation() {
    let harness = TestHarness::builder()
        .with_corpus(service_corpus())
        .build()
        .await
        .unwrap();

    let reply = harness
        .send_message("sess-1", "Tell me about pizza recipes")
        .await
        .unwrap();

    assert_eq!(reply.response_kind, ResponseKind::HumanHandoffRequest);
    assert!(reply.response_text.contains("human agent"));
}

#[tokio::test]
async fn clarification_band_is_dead_at_default_floor() {
    // "refund policy" scores between 0.6 and 0.7 against this entry, so
    // the default 0.7 floor rejects it outright.
    let corpus = vec![StaticCorpus::entry(
        "r",
        "refund policy information",
        "Refunds are processed within 5 days.",
        &[],
    )];
    let harness = TestHarness::builder()
        .with_corpus(corpus.clone())
        .build()
        .await
        .unwrap();
    let reply = harness.send_message("sess-1", "refund policy").await.unwrap();
    assert_eq!(reply.response_kind, ResponseKind::HumanHandoffRequest);

    // Lowering the acceptance floor to 0.6 makes the clarification tier
    // reachable with the same corpus and query.
    let lowered = TestHarness::builder()
        .with_corpus(corpus)
        .with_matcher_config(MatcherConfig {
            accept_threshold: 0.6,
            ..MatcherConfig::default()
        })
        .build()
        .await
        .unwrap();
    let reply = lowered.send_message("sess-1", "refund policy").await.unwrap();
    assert_eq!(reply.response_kind, ResponseKind::Clarification);
    assert!(reply.response_text.starts_with("I think you're asking about:"));
    let confidence = reply.confidence.unwrap();
    assert!((0.6..0.7).contains(&confidence));
}

// ---- Escalation state machine ----

#[tokio::test]
async fn yes_after_escalation_offer_collects_details() {
    let harness = TestHarness::builder()
        .with_corpus(service_corpus())
        .build()
        .await
        .unwrap();

    let offer = harness
        .send_message("sess-1", "Tell me about pizza recipes")
        .await
        .unwrap();
    assert_eq!(offer.response_kind, ResponseKind::HumanHandoffRequest);

    let reply = harness.send_message("sess-1", "yes").await.unwrap();
    assert_eq!(reply.response_kind, ResponseKind::CollectHumanDetails);
    assert!(reply.response_text.contains("1. Your Name"));
}

#[tokio::test]
async fn detail_collection_triggers_regardless_of_matcher_state() {
    // Even with an empty corpus (matcher can never answer), the reply to
    // an escalation offer must be the detail prompt.
    let harness = TestHarness::builder().build().await.unwrap();

    harness.send_message("sess-1", "anything at all").await.unwrap();
    let reply = harness.send_message("sess-1", "ok").await.unwrap();
    assert_eq!(reply.response_kind, ResponseKind::CollectHumanDetails);
}

#[tokio::test]
async fn turns_are_persisted_for_every_branch() {
    let harness = TestHarness::builder()
        .with_corpus(service_corpus())
        .build()
        .await
        .unwrap();

    harness
        .send_message("sess-1", "What service do you provide?")
        .await
        .unwrap();
    harness
        .send_message("sess-1", "Tell me about pizza recipes")
        .await
        .unwrap();
    harness.send_message("sess-1", "yes").await.unwrap();

    let (_cid, turns) = harness.chat.conversation_history("sess-1").await.unwrap();
    // Three exchanges, user + assistant each.
    assert_eq!(turns.len(), 6);
    assert!(turns.iter().step_by(2).all(|t| t.is_user));
    assert!(turns.iter().skip(1).step_by(2).all(|t| !t.is_user));
}

// ---- Handoff intake ----

#[tokio::test]
async fn handoff_submission_is_deduplicated_while_pending() {
    let harness = TestHarness::builder()
        .with_corpus(service_corpus())
        .build()
        .await
        .unwrap();

    harness
        .send_message("sess-1", "Tell me about pizza recipes")
        .await
        .unwrap();

    let first = harness
        .submit_details("sess-1", "John Doe", "+1234567890", "Unable to book")
        .await
        .unwrap();
    assert!(first.created);

    let second = harness
        .submit_details("sess-1", "Jane Doe", "+0987654321", "Another issue")
        .await
        .unwrap();
    assert!(!second.created);
    assert!(second.already_queued);
    assert_eq!(second.ticket_id, first.ticket_id);

    let pending = harness.pending_ticket("sess-1").await.unwrap().unwrap();
    assert_eq!(pending.id, first.ticket_id);
    assert_eq!(pending.status, TicketStatus::Pending);
    assert_eq!(pending.name, "John Doe");
}

#[tokio::test]
async fn unknown_session_submission_creates_nothing() {
    let harness = TestHarness::builder().build().await.unwrap();

    let err = harness
        .submit_details("ghost", "John", "+123", "help")
        .await
        .unwrap_err();
    assert!(matches!(err, FaqdeskError::UnknownSession(_)));
    assert!(harness.pending_ticket("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn notification_is_sent_for_new_tickets_only() {
    let harness = TestHarness::builder()
        .with_corpus(service_corpus())
        .build()
        .await
        .unwrap();

    harness.send_message("sess-1", "unanswerable").await.unwrap();
    harness
        .submit_details("sess-1", "John", "+123", "help")
        .await
        .unwrap();
    harness
        .submit_details("sess-1", "John", "+123", "help again")
        .await
        .unwrap();

    // The notifier runs in a spawned task; give it a moment.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let notified = harness.notifier.notified().await;
    assert_eq!(notified.len(), 1, "only the created ticket notifies");
    assert_eq!(notified[0].name, "John");
}

#[tokio::test]
async fn notification_failure_does_not_roll_back_the_ticket() {
    let harness = TestHarness::builder()
        .with_corpus(service_corpus())
        .with_failing_notifier()
        .build()
        .await
        .unwrap();

    harness.send_message("sess-1", "unanswerable").await.unwrap();
    let receipt = harness
        .submit_details("sess-1", "John", "+123", "help")
        .await
        .unwrap();

    assert!(receipt.created, "submission succeeds despite notify failure");
    let pending = harness.pending_ticket("sess-1").await.unwrap();
    assert!(pending.is_some(), "ticket is durable");
}

// ---- Input rejection ----

#[tokio::test]
async fn blank_message_is_rejected_before_persistence() {
    let harness = TestHarness::builder()
        .with_corpus(service_corpus())
        .build()
        .await
        .unwrap();

    let err = harness.send_message("sess-1", "   ").await.unwrap_err();
    assert!(matches!(err, FaqdeskError::InvalidInput(_)));

    let history = harness.chat.conversation_history("sess-1").await;
    assert!(
        matches!(history, Err(FaqdeskError::UnknownSession(_))),
        "no conversation should exist after a rejected message"
    );
}
