//! One-time passcode entity for email-based login.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Length of the passcode
pub const CODE_LENGTH: usize = 4;

/// Default time-to-live for issued passcodes (5 minutes)
pub const DEFAULT_TTL_SECS: i64 = 300;

/// One-time passcode issued for an email identity
///
/// The record carries its own absolute expiry so storage stays
/// TTL-agnostic. A record is removed on successful verification or
/// when expiry is detected, never rewritten in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The 4-digit passcode
    pub code: String,

    /// Timestamp when the passcode was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the passcode expires
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record expiring `ttl_secs` after `issued_at`
    pub fn new(code: String, issued_at: DateTime<Utc>, ttl_secs: i64) -> Self {
        let expires_at = issued_at + Duration::seconds(ttl_secs);

        Self {
            code,
            issued_at,
            expires_at,
        }
    }

    /// Checks whether the passcode is expired at the given instant
    ///
    /// Expiry is strict: a passcode checked exactly at `expires_at` is
    /// still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compares a submitted passcode against the stored one in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        if self.code.len() != submitted.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }
}
