//! Store module for OTP record persistence
//!
//! This module provides passcode storage for the MailOtp application. The
//! only backend is an in-process map; records live as long as the server
//! and are evicted lazily on expired reads.

pub mod memory;

pub use memory::MemoryOtpStore;
