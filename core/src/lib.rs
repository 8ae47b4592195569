//! # MailOtp Core
//!
//! Core business logic and domain layer for the MailOtp backend.
//! This crate contains the passcode entity, the issuance and verification
//! services, the delivery gate, and the error types that form the
//! foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
