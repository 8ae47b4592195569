//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the MailOtp application,
//! following Clean Architecture principles. It provides concrete implementations
//! for passcode storage and email delivery.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Store**: In-memory OTP storage keyed by email address
//! - **Email**: Mailer implementations (SMTP via lettre, mock for development)

// Re-export core types for convenience
pub use mo_core::errors::*;

/// Email delivery module - SMTP and mock mailers
pub mod email;

/// Store module - OTP record storage implementations
pub mod store;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// SMTP transport construction or connection error
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Malformed email address in mailer configuration
    #[error("Email address error: {0}")]
    Address(#[from] lettre::address::AddressError),
}
