//! Types for OTP service results

use crate::services::delivery::DeliveryOutcome;

/// Result of issuing a passcode
#[derive(Debug, Clone)]
pub struct IssueOutcome {
    /// The generated passcode, exactly as stored
    pub code: String,

    /// How the passcode reached (or will reach) the user; the API layer
    /// withholds the code from the response unless this is the fallback
    pub delivery: DeliveryOutcome,
}
