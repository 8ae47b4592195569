//! Passcode policy configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// Passcode policy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds a stored passcode stays valid
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl OtpConfig {
    /// Load passcode policy from environment variables
    pub fn from_env() -> Self {
        Self {
            ttl_secs: env::var("OTP_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_ttl_secs),
        }
    }
}

fn default_ttl_secs() -> u64 {
    300 // 5 minutes
}
