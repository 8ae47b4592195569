//! Domain-specific error types and error handling.

use thiserror::Error;

/// Verification errors for submitted passcodes
///
/// Display strings are the exact messages returned to clients, so the
/// API layer maps these without rewording.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("OTP not found or expired")]
    NotFound,

    #[error("OTP has expired")]
    Expired,

    #[error("Invalid OTP")]
    Mismatch,
}

/// Mail channel errors
///
/// Internal only: the delivery gate absorbs these and converts them
/// into the on-screen fallback, so they never reach a client.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Connection to mail server failed: {0}")]
    Connect(String),

    #[error("Sending mail failed: {0}")]
    Send(String),

    #[error("Mail operation timed out after {0} seconds")]
    Timeout(u64),
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Otp(#[from] OtpError),
}

pub type DomainResult<T> = Result<T, DomainError>;
