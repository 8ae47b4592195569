//! Mock Mailer Implementation
//!
//! A mock implementation of the mailer for development and testing. This
//! implementation prints passcodes to the console instead of sending them,
//! which is also the natural pairing for the on-screen delivery fallback.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use mo_core::errors::DeliveryError;
use mo_core::services::Mailer;
use mo_shared::utils::mask_email;

/// Mock mailer for development and testing
///
/// This implementation:
/// - Prints passcode messages to the console
/// - Generates mock message IDs
/// - Tracks message count for testing
/// - Can simulate probe and send failures
#[derive(Clone)]
pub struct MockMailer {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock mailer whose probe and sends always fail
    ///
    /// Used when a real transport cannot be constructed: the startup probe
    /// fails against this mock and the delivery gate degrades, exactly as
    /// with an unreachable relay.
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
            console_output: false,
        }
    }

    /// Create a mock mailer with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn probe(&self) -> Result<(), DeliveryError> {
        if self.simulate_failure {
            return Err(DeliveryError::Connect(
                "Simulated connection failure".to_string(),
            ));
        }
        Ok(())
    }

    async fn send_otp(&self, to: &str, code: &str) -> Result<String, DeliveryError> {
        let masked = mask_email(to);

        if self.simulate_failure {
            warn!("Mock mailer simulating failure for email: {}", masked);
            return Err(DeliveryError::Send(
                "Simulated email delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            // Console output for development - show the full passcode
            println!("\n{}", "=".repeat(60));
            println!("📧 MOCK MAILER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} (masked: {})", to, masked);
            println!("Message ID: {}", message_id);
            println!("Your OTP: {}", code);
            println!("{}\n", "=".repeat(60));
        }

        // Structured logging for production
        info!(
            target: "mailer",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        // Simulate network delay
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
