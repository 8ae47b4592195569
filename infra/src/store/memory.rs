//! In-memory OTP store
//!
//! Holds one pending passcode per email address in a process-local map.
//! Storing a new record for an address replaces the previous one, so only
//! the most recently issued passcode can ever verify. Expiry is enforced
//! by the caller; the store itself never inspects timestamps.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use mo_core::domain::entities::OtpRecord;
use mo_core::services::OtpStore;

/// Map-backed OTP store for single-process deployments
pub struct MemoryOtpStore {
    records: RwLock<HashMap<String, OtpRecord>>,
}

impl MemoryOtpStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryOtpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn put(&self, identity: &str, record: OtpRecord) {
        let mut records = self.records.write().await;
        records.insert(identity.to_string(), record);
    }

    async fn get(&self, identity: &str) -> Option<OtpRecord> {
        let records = self.records.read().await;
        records.get(identity).cloned()
    }

    async fn consume(&self, identity: &str) -> Option<OtpRecord> {
        // Remove-and-return under the write lock so two racing verifications
        // cannot both redeem the same record.
        let mut records = self.records.write().await;
        records.remove(identity)
    }

    async fn delete(&self, identity: &str) {
        let mut records = self.records.write().await;
        records.remove(identity);
    }
}
