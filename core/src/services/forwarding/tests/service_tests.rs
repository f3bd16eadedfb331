//! Tests for the forwarding service

use std::sync::Arc;

use crate::domain::entities::RuleDraft;
use crate::domain::value_objects::{ForwardStatus, ProcessingStatus};
use crate::errors::SendError;
use crate::repositories::{InMemoryRuleRepository, InMemorySettingStore, RuleRepository};
use crate::services::forwarding::{compose_forward_text, ForwardingService, ForwardingServiceConfig};
use crate::services::monitoring::MonitoringControl;

use super::mocks::{MockTransport, RecordingNotifier, SentMessage};

struct Fixture {
    service: ForwardingService,
    rules: InMemoryRuleRepository,
    settings: InMemorySettingStore,
    transport: Arc<MockTransport>,
    notifier: Arc<RecordingNotifier>,
}

async fn fixture_with(transport: MockTransport, monitoring_on: bool) -> Fixture {
    let rules = InMemoryRuleRepository::new();
    let settings = InMemorySettingStore::new();
    let transport = Arc::new(transport);
    let notifier = Arc::new(RecordingNotifier::default());

    let monitoring = MonitoringControl::new(Arc::new(settings.clone()));
    monitoring.set_enabled(monitoring_on).await.unwrap();

    let service = ForwardingService::new(
        Arc::new(rules.clone()),
        transport.clone(),
        monitoring,
        ForwardingServiceConfig::default(),
    )
    .with_notifier(notifier.clone());

    Fixture {
        service,
        rules,
        settings,
        transport,
        notifier,
    }
}

async fn fixture() -> Fixture {
    fixture_with(MockTransport::new(), true).await
}

#[tokio::test]
async fn test_exact_sender_match_forwards() {
    let f = fixture().await;
    f.rules
        .insert(&RuleDraft::new("+15550001111").from_sender("+15551234567", true))
        .await
        .unwrap();

    let report = f
        .service
        .handle_inbound_message("+15551234567", "Your code is 4821")
        .await;

    assert_eq!(report.status, ProcessingStatus::Processed);
    assert_eq!(
        f.transport.sent_messages(),
        vec![SentMessage::Single {
            destination: "+15550001111".to_string(),
            text: "Forwarded SMS from +15551234567:\nYour code is 4821".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_exact_sender_mismatch_sends_nothing() {
    let f = fixture().await;
    f.rules
        .insert(&RuleDraft::new("+15550001111").from_sender("+15551234567", true))
        .await
        .unwrap();

    let report = f
        .service
        .handle_inbound_message("+155512345678", "Your code is 4821")
        .await;

    assert_eq!(report.rules_evaluated, 1);
    assert!(report.outcomes.is_empty());
    assert!(f.transport.sent_messages().is_empty());
}

#[tokio::test]
async fn test_partial_sender_and_content_match() {
    let f = fixture().await;
    f.rules
        .insert(
            &RuleDraft::new("+15550002222")
                .from_sender("BANK", false)
                .containing("otp"),
        )
        .await
        .unwrap();

    f.service
        .handle_inbound_message("MYBANK-ALERTS", "Your OTP is 9911")
        .await;
    assert_eq!(f.transport.destinations(), vec!["+15550002222"]);

    f.service
        .handle_inbound_message("MYBANK-ALERTS", "Your balance is low")
        .await;
    assert_eq!(f.transport.sent_messages().len(), 1);
}

#[tokio::test]
async fn test_monitoring_disabled_reads_no_rules() {
    let f = fixture_with(MockTransport::new(), false).await;
    f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();
    let reads_before = f.rules.read_count();

    let report = f.service.handle_inbound_message("anyone", "anything").await;

    assert_eq!(report.status, ProcessingStatus::MonitoringDisabled);
    assert!(f.transport.sent_messages().is_empty());
    assert_eq!(f.rules.read_count(), reads_before);
}

#[tokio::test]
async fn test_monitoring_read_failure_counts_as_disabled() {
    let f = fixture().await;
    f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();
    f.settings.set_should_fail(true);

    let report = f.service.handle_inbound_message("anyone", "anything").await;

    assert_eq!(report.status, ProcessingStatus::MonitoringDisabled);
    assert!(f.transport.sent_messages().is_empty());
}

#[tokio::test]
async fn test_disabled_rule_is_skipped() {
    let f = fixture().await;
    f.rules.insert(&RuleDraft::new("+1000").disabled()).await.unwrap();

    let report = f.service.handle_inbound_message("anyone", "anything").await;

    assert_eq!(report.rules_evaluated, 0);
    assert!(f.transport.sent_messages().is_empty());
}

#[tokio::test]
async fn test_long_message_is_sent_multipart() {
    let f = fixture().await;
    f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();

    let body = "a".repeat(250);
    let report = f.service.handle_inbound_message("+15551234567", &body).await;

    let sent = f.transport.sent_messages();
    assert_eq!(sent.len(), 1);
    match &sent[0] {
        SentMessage::Multipart { destination, parts } => {
            assert_eq!(destination, "+1000");
            assert!(parts.len() >= 2);
            assert!(parts.iter().all(|p| p.chars().count() <= 160));
            assert_eq!(parts.concat(), compose_forward_text("+15551234567", &body));
        }
        other => panic!("expected multipart send, got {:?}", other),
    }

    match &report.outcomes[0].status {
        ForwardStatus::Forwarded { parts, message_ids } => {
            assert_eq!(*parts, message_ids.len());
            assert!(*parts >= 2);
        }
        other => panic!("expected forwarded status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_text_at_limit_is_single_part() {
    let f = fixture().await;
    f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();

    let header_len = compose_forward_text("S", "").chars().count();
    let body = "b".repeat(160 - header_len);
    f.service.handle_inbound_message("S", &body).await;

    assert!(matches!(
        f.transport.sent_messages()[0],
        SentMessage::Single { .. }
    ));
}

#[tokio::test]
async fn test_limit_counts_utf16_units() {
    let f = fixture().await;
    f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();

    // 92 characters but 162 UTF-16 code units
    let body = "😀".repeat(70);
    let text = compose_forward_text("S", &body);
    assert!(text.chars().count() <= 160);
    f.service.handle_inbound_message("S", &body).await;

    match &f.transport.sent_messages()[0] {
        SentMessage::Multipart { parts, .. } => {
            assert!(parts.len() >= 2);
            assert_eq!(parts.concat(), text);
        }
        other => panic!("expected multipart send, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_forward_does_not_stop_later_rules() {
    let f = fixture_with(MockTransport::failing_for("+2000"), true).await;
    f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();
    f.rules.insert(&RuleDraft::new("+2000")).await.unwrap();
    f.rules.insert(&RuleDraft::new("+3000")).await.unwrap();

    let report = f.service.handle_inbound_message("anyone", "anything").await;

    assert_eq!(report.destinations(), vec!["+1000", "+2000", "+3000"]);
    assert_eq!(report.forwarded_count(), 2);
    assert!(matches!(
        report.outcomes[1].status,
        ForwardStatus::Failed { .. }
    ));
    assert_eq!(f.transport.destinations(), vec!["+1000", "+3000"]);
}

#[tokio::test]
async fn test_every_matching_rule_forwards_in_order() {
    let f = fixture().await;
    f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();
    f.rules
        .insert(&RuleDraft::new("+2000").containing("code"))
        .await
        .unwrap();
    f.rules
        .insert(&RuleDraft::new("+3000").from_sender("OTHER", true))
        .await
        .unwrap();
    f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();

    f.service.handle_inbound_message("SHOP", "Your code").await;

    assert_eq!(f.transport.destinations(), vec!["+1000", "+2000", "+1000"]);
}

#[tokio::test]
async fn test_store_read_failure_forwards_nothing() {
    let f = fixture().await;
    f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();
    f.rules.set_fail_reads(true);

    let report = f.service.handle_inbound_message("anyone", "anything").await;

    assert!(matches!(
        report.status,
        ProcessingStatus::StoreUnavailable { .. }
    ));
    assert!(f.transport.sent_messages().is_empty());
}

#[tokio::test]
async fn test_rule_changes_apply_to_next_message() {
    let f = fixture().await;
    let id = f.rules.insert(&RuleDraft::new("+1000")).await.unwrap();

    f.service.handle_inbound_message("a", "first").await;

    let mut rule = f.rules.find_by_id(id).await.unwrap().unwrap();
    rule.set_enabled(false);
    f.rules.update(&rule).await.unwrap();

    f.service.handle_inbound_message("a", "second").await;
    assert_eq!(f.transport.sent_messages().len(), 1);
}

#[tokio::test]
async fn test_forward_notifies_outcome() {
    let f = fixture_with(MockTransport::failing_for("+9999"), true).await;

    let delivery = f.service.forward("+1000", "BANK", "hello").await.unwrap();
    assert_eq!(delivery.parts, 1);

    let error = f.service.forward("+9999", "BANK", "hello").await.unwrap_err();
    assert!(matches!(error, SendError::Transport { .. }));

    let events = f.notifier.events();
    assert_eq!(events.len(), 2);
    assert!(events[0].is_success());
    assert!(!events[1].is_success());
    assert_eq!(events[1].destination(), "+9999");
}

#[tokio::test]
async fn test_content_match_ignores_case() {
    let f = fixture().await;
    f.rules.insert(&RuleDraft::new("+1000").containing("OTP")).await.unwrap();

    let report = f.service.handle_inbound_message("x", "your otp: 12").await;
    assert_eq!(report.forwarded_count(), 1);
}
