//! Configuration for the OTP service

use crate::domain::entities::otp_record::DEFAULT_TTL_SECS;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds before an issued passcode expires
    pub ttl_secs: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}
