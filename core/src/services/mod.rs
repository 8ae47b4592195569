//! Business services containing domain logic and use cases.

pub mod delivery;
pub mod otp;

// Re-export commonly used types
pub use delivery::{DeliveryGate, DeliveryOutcome, Mailer};
pub use otp::{
    Clock, CodeGenerator, IssueOutcome, OsRngCodeGenerator, OtpService, OtpServiceConfig,
    OtpStore, SystemClock,
};
