//! Mail delivery gate module
//!
//! This module tracks the health of the mail channel and decides, per
//! issued passcode, between email delivery and on-screen fallback:
//! - Startup connectivity probe with a hard timeout
//! - One-way degradation on the first live send failure
//! - Bounded send attempts so a stuck connection cannot hang a request

mod gate;
mod mailer;
mod types;

#[cfg(test)]
mod tests;

pub use gate::DeliveryGate;
pub use mailer::Mailer;
pub use types::DeliveryOutcome;
