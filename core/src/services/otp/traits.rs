//! Traits for the passcode generator, clock and store seams

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::otp_record::OtpRecord;

/// Trait for passcode generation
pub trait CodeGenerator: Send + Sync {
    /// Produce a new 4-digit passcode
    fn generate(&self) -> String;
}

/// Trait for the time source
///
/// Injected so issuance and expiry checks are testable with a manual
/// clock instead of sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Trait for passcode storage, keyed by identity
///
/// Pure in-memory bookkeeping with no failure mode. Records carry their
/// own expiry; the store never interprets timestamps, so expiry stays a
/// service-level decision.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Insert or overwrite the record for an identity
    async fn put(&self, identity: &str, record: OtpRecord);

    /// Look up the record for an identity without mutating it
    async fn get(&self, identity: &str) -> Option<OtpRecord>;

    /// Remove and return the record, keeping passcodes single-use
    /// under concurrent verification
    async fn consume(&self, identity: &str) -> Option<OtpRecord>;

    /// Remove the record unconditionally
    async fn delete(&self, identity: &str);
}
