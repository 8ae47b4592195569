use serde::{Deserialize, Serialize};

/// Response body for `GET /health`
///
/// `emailConfigured` reports whether mail credentials were present at
/// startup; `emailConnected` reports whether the delivery gate is
/// currently healthy. A configured but unconnected server is running in
/// on-screen display mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub email_configured: bool,
    pub email_connected: bool,
}
