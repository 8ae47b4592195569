//! Email delivery configuration module
//!
//! Credentials and connection settings for the outbound SMTP relay. The
//! service stays usable without them: an unconfigured relay fails the startup
//! probe and passcodes are shown on screen instead of mailed.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Delivery provider ("smtp" for a real relay, "mock" for development)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// SMTP relay hostname
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP relay port (implicit TLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Account username, also the default sender address
    #[serde(default)]
    pub username: String,

    /// Account password or app password
    #[serde(default)]
    pub password: String,

    /// Sender address shown to recipients
    #[serde(default)]
    pub from_address: String,

    /// Startup connectivity probe timeout in seconds
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// Per-message send timeout in seconds
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: String::new(),
            probe_timeout_secs: default_probe_timeout(),
            send_timeout_secs: default_send_timeout(),
        }
    }
}

impl EmailConfig {
    /// Load email configuration from environment variables
    ///
    /// `EMAIL_FROM` defaults to `EMAIL_USER` when unset, matching the common
    /// case of a relay that only accepts its own account as sender.
    pub fn from_env() -> Self {
        let username = env::var("EMAIL_USER").unwrap_or_default();
        let from_address = env::var("EMAIL_FROM").unwrap_or_else(|_| username.clone());

        Self {
            provider: env::var("EMAIL_PROVIDER").unwrap_or_else(|_| default_provider()),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| default_smtp_host()),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_smtp_port),
            username,
            password: env::var("EMAIL_PASS").unwrap_or_default(),
            from_address,
            probe_timeout_secs: env::var("PROBE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_probe_timeout),
            send_timeout_secs: env::var("SEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_send_timeout),
        }
    }

    /// Whether a mail account is configured
    ///
    /// Keyed to the account username alone: a present username with a
    /// missing password still counts as configured and simply fails the
    /// connectivity probe. Feeds the `emailConfigured` field of the
    /// health endpoint.
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty()
    }

    /// Startup probe timeout
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Per-message send timeout
    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }
}

fn default_provider() -> String {
    String::from("smtp")
}

fn default_smtp_host() -> String {
    String::from("smtp.gmail.com")
}

fn default_smtp_port() -> u16 {
    465
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_send_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_default() {
        let config = EmailConfig::default();
        assert_eq!(config.provider, "smtp");
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.smtp_port, 465);
        assert_eq!(config.probe_timeout_secs, 5);
        assert_eq!(config.send_timeout_secs, 10);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_is_configured_tracks_username() {
        let mut config = EmailConfig::default();
        assert!(!config.is_configured());

        config.username = String::from("login@example.com");
        assert!(config.is_configured());
    }

    #[test]
    fn test_timeout_accessors() {
        let config = EmailConfig::default();
        assert_eq!(config.probe_timeout(), Duration::from_secs(5));
        assert_eq!(config.send_timeout(), Duration::from_secs(10));
    }
}
