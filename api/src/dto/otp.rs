use serde::{Deserialize, Serialize};

/// Request body for `POST /issue-otp`
///
/// The email address doubles as the key the passcode is stored under.
/// It is optional at the type level so a missing field produces the
/// documented error body instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueOtpRequest {
    /// Recipient email address
    pub email: Option<String>,
}

/// Request body for `POST /verify-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    /// Email address the passcode was issued for
    pub email: Option<String>,

    /// Submitted 4-digit passcode
    pub otp: Option<String>,
}

/// Response body for a successful `POST /issue-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueOtpResponse {
    pub message: String,

    /// Delivery method used: "email" or "display"
    pub method: String,

    /// The passcode itself, present only in the on-screen fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// Response body for a successful `POST /verify-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub message: String,
}

/// Error body shared by all failure responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
