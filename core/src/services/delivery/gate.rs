//! Delivery gate implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use mo_shared::utils::mask_email;

use super::mailer::Mailer;
use super::types::DeliveryOutcome;

/// Gate tracking mail channel health
///
/// The gate starts degraded and becomes healthy only through a successful
/// startup probe. The first live send failure flips it back to degraded
/// for the rest of the process lifetime; a restart re-probes. Degradation
/// is one-way so a flaky channel cannot oscillate between modes.
pub struct DeliveryGate {
    /// Mail channel used for probing and sending
    mailer: Arc<dyn Mailer>,
    /// Whether the channel is currently usable
    healthy: AtomicBool,
    /// Upper bound on the startup probe
    probe_timeout: Duration,
    /// Upper bound on each send attempt
    send_timeout: Duration,
}

impl DeliveryGate {
    /// Create a new gate in the degraded state
    pub fn new(mailer: Arc<dyn Mailer>, probe_timeout: Duration, send_timeout: Duration) -> Self {
        Self {
            mailer,
            healthy: AtomicBool::new(false),
            probe_timeout,
            send_timeout,
        }
    }

    /// Whether the mail channel is currently usable
    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }

    /// Probe mail server connectivity, bounded by the probe timeout
    ///
    /// Meant to run once at startup. Failure or timeout leaves the gate
    /// degraded and the service running; passcodes are then shown on screen
    /// instead of emailed.
    pub async fn startup_probe(&self) -> bool {
        match tokio::time::timeout(self.probe_timeout, self.mailer.probe()).await {
            Ok(Ok(())) => {
                self.healthy.store(true, Ordering::SeqCst);
                info!(
                    provider = self.mailer.provider_name(),
                    event = "mail_probe_ok",
                    "Email server is ready to send messages"
                );
                true
            }
            Ok(Err(e)) => {
                self.healthy.store(false, Ordering::SeqCst);
                warn!(
                    provider = self.mailer.provider_name(),
                    error = %e,
                    event = "mail_probe_failed",
                    "Email configuration error, will display OTP on screen"
                );
                false
            }
            Err(_) => {
                self.healthy.store(false, Ordering::SeqCst);
                warn!(
                    provider = self.mailer.provider_name(),
                    timeout_secs = self.probe_timeout.as_secs(),
                    event = "mail_probe_timeout",
                    "Email verification timed out, will display OTP on screen"
                );
                false
            }
        }
    }

    /// Deliver a passcode through the channel
    ///
    /// While healthy, attempts the send within the send timeout. Any
    /// failure or timeout degrades the gate and falls back to the
    /// on-screen outcome in the same call, so the request still succeeds.
    /// While degraded, returns the fallback without touching the mailer.
    pub async fn deliver(&self, to: &str, code: &str) -> DeliveryOutcome {
        if !self.is_healthy() {
            return DeliveryOutcome::ShownOnScreen;
        }

        match tokio::time::timeout(self.send_timeout, self.mailer.send_otp(to, code)).await {
            Ok(Ok(message_id)) => {
                info!(
                    email = %mask_email(to),
                    message_id = %message_id,
                    event = "otp_email_sent",
                    "Passcode email sent"
                );
                DeliveryOutcome::SentByEmail { message_id }
            }
            Ok(Err(e)) => {
                self.healthy.store(false, Ordering::SeqCst);
                warn!(
                    email = %mask_email(to),
                    error = %e,
                    event = "otp_email_failed",
                    "Email sending failed, switching to display mode"
                );
                DeliveryOutcome::ShownOnScreen
            }
            Err(_) => {
                self.healthy.store(false, Ordering::SeqCst);
                warn!(
                    email = %mask_email(to),
                    timeout_secs = self.send_timeout.as_secs(),
                    event = "otp_email_timeout",
                    "Email sending timed out, switching to display mode"
                );
                DeliveryOutcome::ShownOnScreen
            }
        }
    }
}
