//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `email` - SMTP delivery credentials and timeouts
//! - `environment` - Environment detection
//! - `otp` - Passcode lifetime policy
//! - `server` - HTTP server binding

pub mod email;
pub mod environment;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use email::EmailConfig;
pub use environment::Environment;
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Email delivery configuration
    pub email: EmailConfig,

    /// Passcode policy configuration
    #[serde(default)]
    pub otp: OtpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            email: EmailConfig::default(),
            otp: OtpConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            email: EmailConfig::from_env(),
            otp: OtpConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.otp.ttl_secs, 300);
    }
}
