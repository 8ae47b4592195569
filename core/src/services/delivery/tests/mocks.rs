//! Mock mailer for delivery gate tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::DeliveryError;
use crate::services::delivery::mailer::Mailer;

// Mock mailer with switchable probe and send behavior
pub struct MockMailer {
    pub sent: Mutex<HashMap<String, String>>,
    attempt_count: AtomicU64,
    probe_ok: bool,
    probe_delay: Option<Duration>,
    send_delay: Option<Duration>,
    fail_sends: AtomicBool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(HashMap::new()),
            attempt_count: AtomicU64::new(0),
            probe_ok: true,
            probe_delay: None,
            send_delay: None,
            fail_sends: AtomicBool::new(false),
        }
    }

    pub fn with_probe_failure() -> Self {
        Self {
            probe_ok: false,
            ..Self::new()
        }
    }

    pub fn with_probe_delay(delay: Duration) -> Self {
        Self {
            probe_delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn with_send_delay(delay: Duration) -> Self {
        Self {
            send_delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// Number of send attempts, counting failed ones
    pub fn attempt_count(&self) -> u64 {
        self.attempt_count.load(Ordering::SeqCst)
    }

    pub fn sent_code(&self, to: &str) -> Option<String> {
        self.sent.lock().unwrap().get(to).cloned()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn probe(&self) -> Result<(), DeliveryError> {
        if let Some(delay) = self.probe_delay {
            tokio::time::sleep(delay).await;
        }
        if self.probe_ok {
            Ok(())
        } else {
            Err(DeliveryError::Connect("mock probe refused".to_string()))
        }
    }

    async fn send_otp(&self, to: &str, code: &str) -> Result<String, DeliveryError> {
        if let Some(delay) = self.send_delay {
            tokio::time::sleep(delay).await;
        }
        let attempt = self.attempt_count.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(DeliveryError::Send("mock send failure".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .insert(to.to_string(), code.to_string());
        Ok(format!("mock-msg-{}", attempt))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
