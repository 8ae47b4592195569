//! Types for delivery results

/// How an issued passcode reached (or will reach) the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The mail provider accepted the message
    SentByEmail {
        /// Provider identifier for the sent message
        message_id: String,
    },

    /// The channel is degraded; the caller shows the passcode directly
    ShownOnScreen,
}

impl DeliveryOutcome {
    /// True when the passcode went out by email
    pub fn is_email(&self) -> bool {
        matches!(self, DeliveryOutcome::SentByEmail { .. })
    }
}
