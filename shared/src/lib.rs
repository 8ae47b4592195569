//! Shared utilities and common types for the MailOtp server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from environment variables
//! - Utility functions (email masking for logs)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, EmailConfig, Environment, OtpConfig, ServerConfig};
pub use utils::email::mask_email;
