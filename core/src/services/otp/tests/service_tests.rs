//! Unit tests for the OTP service

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Utc;

use crate::errors::{DomainError, OtpError};
use crate::services::delivery::{DeliveryGate, DeliveryOutcome};
use crate::services::otp::{OtpService, OtpServiceConfig};

use super::mocks::{ManualClock, MockMailer, MockOtpStore, ScriptedCodeGenerator};

struct Fixture {
    service: OtpService,
    store: Arc<MockOtpStore>,
    gate: Arc<DeliveryGate>,
    mailer: Arc<MockMailer>,
    clock: Arc<ManualClock>,
}

/// Builds a service around scripted codes; `probed` decides whether the
/// gate ran a successful startup probe
async fn fixture(codes: &[&str], probed: bool) -> Fixture {
    let store = Arc::new(MockOtpStore::new());
    let mailer = Arc::new(MockMailer::new());
    let gate = Arc::new(DeliveryGate::new(
        mailer.clone(),
        StdDuration::from_secs(1),
        StdDuration::from_secs(1),
    ));
    if probed {
        gate.startup_probe().await;
    }
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let generator = Arc::new(ScriptedCodeGenerator::new(codes));

    let service = OtpService::new(
        store.clone(),
        gate.clone(),
        generator,
        clock.clone(),
        OtpServiceConfig::default(),
    );

    Fixture {
        service,
        store,
        gate,
        mailer,
        clock,
    }
}

#[tokio::test]
async fn test_issue_sends_email_and_stores_code() {
    let f = fixture(&["1234"], true).await;

    let outcome = f.service.issue("user@example.com").await.unwrap();

    assert_eq!(outcome.code, "1234");
    assert!(outcome.delivery.is_email());
    assert_eq!(
        f.mailer.sent_code("user@example.com"),
        Some("1234".to_string())
    );
    assert!(f.store.contains("user@example.com"));
}

#[tokio::test]
async fn test_issue_degraded_returns_display_outcome() {
    let f = fixture(&["1234"], false).await;

    let outcome = f.service.issue("user@example.com").await.unwrap();

    assert_eq!(outcome.delivery, DeliveryOutcome::ShownOnScreen);
    assert_eq!(f.mailer.attempt_count(), 0);

    // A displayed passcode verifies exactly like an emailed one
    f.service.verify("user@example.com", "1234").await.unwrap();
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let f = fixture(&["1234", "5678"], true).await;

    f.service.issue("user@example.com").await.unwrap();
    f.service.issue("user@example.com").await.unwrap();

    let err = f
        .service
        .verify("user@example.com", "1234")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Mismatch)));

    f.service.verify("user@example.com", "5678").await.unwrap();
}

#[tokio::test]
async fn test_verify_consumes_record() {
    let f = fixture(&["1234"], true).await;

    f.service.issue("user@example.com").await.unwrap();
    f.service.verify("user@example.com", "1234").await.unwrap();

    assert!(!f.store.contains("user@example.com"));

    let err = f
        .service
        .verify("user@example.com", "1234")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::NotFound)));
}

#[tokio::test]
async fn test_verify_unknown_identity() {
    let f = fixture(&[], true).await;

    let err = f
        .service
        .verify("nobody@example.com", "1234")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::NotFound)));
}

#[tokio::test]
async fn test_verify_expired_code_is_deleted() {
    let f = fixture(&["1234"], true).await;

    f.service.issue("user@example.com").await.unwrap();
    f.clock.advance_secs(301);

    // Correct code, but expiry is checked first
    let err = f
        .service
        .verify("user@example.com", "1234")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Expired)));
    assert!(!f.store.contains("user@example.com"));

    // The record is gone, so the next attempt no longer reports expiry
    let err = f
        .service
        .verify("user@example.com", "1234")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::NotFound)));
}

#[tokio::test]
async fn test_verify_at_exact_expiry_still_valid() {
    let f = fixture(&["1234"], true).await;

    f.service.issue("user@example.com").await.unwrap();
    f.clock.advance_secs(300);

    f.service.verify("user@example.com", "1234").await.unwrap();
}

#[tokio::test]
async fn test_verify_wrong_code_keeps_record() {
    let f = fixture(&["1234"], true).await;

    f.service.issue("user@example.com").await.unwrap();

    let err = f
        .service
        .verify("user@example.com", "0000")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Mismatch)));
    assert!(f.store.contains("user@example.com"));

    // A correct retry within the window still succeeds
    f.service.verify("user@example.com", "1234").await.unwrap();
}

#[tokio::test]
async fn test_send_failure_falls_back_and_sticks() {
    let f = fixture(&["1234", "5678"], true).await;

    f.mailer.set_fail_sends(true);

    // The failing request itself returns the fallback outcome
    let outcome = f.service.issue("user@example.com").await.unwrap();
    assert_eq!(outcome.delivery, DeliveryOutcome::ShownOnScreen);
    assert!(!f.gate.is_healthy());
    assert_eq!(f.mailer.attempt_count(), 1);

    // The passcode from the failed send still verifies
    f.service.verify("user@example.com", "1234").await.unwrap();

    // Later issuances skip the mail channel even after sends recover
    f.mailer.set_fail_sends(false);
    let outcome = f.service.issue("other@example.com").await.unwrap();
    assert_eq!(outcome.delivery, DeliveryOutcome::ShownOnScreen);
    assert_eq!(f.mailer.attempt_count(), 1);
}

#[tokio::test]
async fn test_identities_are_independent() {
    let f = fixture(&["1234", "5678"], true).await;

    f.service.issue("a@example.com").await.unwrap();
    f.service.issue("b@example.com").await.unwrap();

    f.service.verify("a@example.com", "1234").await.unwrap();
    f.service.verify("b@example.com", "5678").await.unwrap();
}

#[tokio::test]
async fn test_identity_keying_is_exact() {
    let f = fixture(&["1234"], true).await;

    f.service.issue("User@example.com").await.unwrap();

    // Identities are compared byte for byte, no case folding
    let err = f
        .service
        .verify("user@example.com", "1234")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::NotFound)));
}
