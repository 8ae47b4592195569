//! Shared application state

use std::sync::Arc;

use mo_core::services::{DeliveryGate, OtpService};

/// Application state that holds shared services
pub struct AppState {
    /// OTP lifecycle service
    pub otp_service: Arc<OtpService>,

    /// Delivery gate, consulted by the health endpoint for channel status
    pub gate: Arc<DeliveryGate>,

    /// Whether a mail account was configured at startup
    pub email_configured: bool,
}
