//! Main OTP service implementation

use std::sync::Arc;

use tracing;

use mo_shared::utils::mask_email;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::{DomainResult, OtpError};
use crate::services::delivery::DeliveryGate;

use super::config::OtpServiceConfig;
use super::traits::{Clock, CodeGenerator, OtpStore};
use super::types::IssueOutcome;

/// OTP service for issuing and verifying login passcodes
///
/// Every collaborator is an injected seam: the store, the delivery gate,
/// the code generator and the clock. Handlers share one instance through
/// application state; tests inject a manual clock and a scripted
/// generator.
pub struct OtpService {
    /// Store holding live passcodes
    store: Arc<dyn OtpStore>,
    /// Gate deciding between email delivery and on-screen fallback
    gate: Arc<DeliveryGate>,
    /// Passcode generator
    generator: Arc<dyn CodeGenerator>,
    /// Time source for issuance and expiry checks
    clock: Arc<dyn Clock>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl OtpService {
    /// Create a new OTP service
    pub fn new(
        store: Arc<dyn OtpStore>,
        gate: Arc<DeliveryGate>,
        generator: Arc<dyn CodeGenerator>,
        clock: Arc<dyn Clock>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            store,
            gate,
            generator,
            clock,
            config,
        }
    }

    /// Issue a new passcode for an identity
    ///
    /// This method:
    /// 1. Generates a fresh 4-digit passcode
    /// 2. Stores it with the configured expiry, overwriting and thereby
    ///    invalidating any passcode previously issued for this identity
    /// 3. Hands it to the delivery gate, which either emails it or
    ///    reports that the caller should show it on screen
    ///
    /// The stored record is identical in both delivery outcomes, so a
    /// passcode that fell back to on-screen display still verifies.
    pub async fn issue(&self, identity: &str) -> DomainResult<IssueOutcome> {
        let code = self.generator.generate();
        let record = OtpRecord::new(code.clone(), self.clock.now(), self.config.ttl_secs);

        self.store.put(identity, record).await;

        tracing::info!(
            email = %mask_email(identity),
            event = "otp_generated",
            "Generated new passcode"
        );

        let delivery = self.gate.deliver(identity, &code).await;

        Ok(IssueOutcome { code, delivery })
    }

    /// Verify a submitted passcode
    ///
    /// Check order is load-bearing: existence, then expiry, then match.
    /// An expired-but-matching passcode therefore reports expiry, never
    /// success. A mismatch keeps the record so the user can retry within
    /// the window; expiry deletes it on the spot.
    pub async fn verify(&self, identity: &str, submitted: &str) -> DomainResult<()> {
        let record = match self.store.get(identity).await {
            Some(record) => record,
            None => {
                tracing::warn!(
                    email = %mask_email(identity),
                    event = "otp_not_found",
                    "No passcode on file for identity"
                );
                return Err(OtpError::NotFound.into());
            }
        };

        if record.is_expired_at(self.clock.now()) {
            self.store.delete(identity).await;
            tracing::warn!(
                email = %mask_email(identity),
                event = "otp_expired",
                "Submitted passcode has expired"
            );
            return Err(OtpError::Expired.into());
        }

        if !record.matches(submitted) {
            tracing::warn!(
                email = %mask_email(identity),
                event = "otp_mismatch",
                "Submitted passcode does not match"
            );
            return Err(OtpError::Mismatch.into());
        }

        // Atomic remove-and-return: if a racing request consumed the
        // record first, this verification loses
        if self.store.consume(identity).await.is_none() {
            return Err(OtpError::NotFound.into());
        }

        tracing::info!(
            email = %mask_email(identity),
            event = "otp_verified",
            "Passcode verified successfully"
        );

        Ok(())
    }
}
