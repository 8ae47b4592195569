//! Mail channel abstraction

use async_trait::async_trait;

use crate::errors::DeliveryError;

/// Trait for mail channel integration
///
/// Implementations include:
/// - SMTP transport (lettre)
/// - Mock implementation for development and testing
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Check connectivity to the mail server
    ///
    /// Called once at startup by the delivery gate, bounded by the probe
    /// timeout. A failure here leaves the service running in display mode.
    async fn probe(&self) -> Result<(), DeliveryError>;

    /// Send a passcode to the recipient
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(DeliveryError)` - If sending fails
    async fn send_otp(&self, to: &str, code: &str) -> Result<String, DeliveryError>;

    /// Get the channel provider name (e.g. "SMTP", "Mock")
    fn provider_name(&self) -> &str;
}
