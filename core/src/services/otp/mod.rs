//! OTP service module for email-based login
//!
//! This module provides the complete passcode workflow including:
//! - Cryptographically secure code generation
//! - Storage with expiration and single-use consumption
//! - Verification with constant-time comparison
//! - Delivery through the gate with on-screen fallback

mod clock;
mod config;
mod generator;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::SystemClock;
pub use config::OtpServiceConfig;
pub use generator::OsRngCodeGenerator;
pub use service::OtpService;
pub use traits::{Clock, CodeGenerator, OtpStore};
pub use types::IssueOutcome;
