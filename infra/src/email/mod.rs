//! Email Delivery Module
//!
//! This module provides mailer implementations for delivering one-time
//! passcodes. It includes an SMTP transport for production use and a mock
//! implementation that prints passcodes to the console for development.
//!
//! ## Features
//!
//! - **Mailer Trait**: Common interface defined in the core layer
//! - **Mock Implementation**: Console output for development
//! - **SMTP Support**: Production email via lettre
//! - **Security**: Email address masking in logs

use std::sync::Arc;

use mo_core::services::Mailer;
use mo_shared::config::email::EmailConfig;

pub mod mock;
pub mod smtp;

// Re-export commonly used types
pub use mock::MockMailer;
pub use smtp::SmtpMailer;

/// Create a mailer based on configuration
///
/// Returns the mailer implementation named by the configured provider.
///
/// A broken SMTP configuration does not abort startup: the factory falls
/// back to a mock in failing mode, so the startup probe fails, the
/// delivery gate degrades, and passcodes are shown on screen instead.
pub fn create_mailer(config: &EmailConfig) -> Arc<dyn Mailer> {
    match config.provider.as_str() {
        "mock" => Arc::new(MockMailer::new()),
        "smtp" => match SmtpMailer::new(config) {
            Ok(mailer) => Arc::new(mailer),
            Err(e) => {
                tracing::error!("Failed to initialize SMTP mailer: {}", e);
                tracing::warn!("Falling back to mock mailer in failing mode");
                Arc::new(MockMailer::failing())
            }
        },
        _ => {
            tracing::warn!(
                "Unknown email provider '{}', using mock implementation",
                config.provider
            );
            Arc::new(MockMailer::new())
        }
    }
}
