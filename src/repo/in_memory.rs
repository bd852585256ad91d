use crate::domain::payment::{NewPayment, PaymentRecord};
use crate::error::StoreError;
use crate::repo::PaymentStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store with sequential ids starting at 1.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    records: Arc<RwLock<Vec<PaymentRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with `StoreError::Unavailable` until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store switched off".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn save(&self, payment: NewPayment) -> Result<PaymentRecord, StoreError> {
        self.check()?;
        let mut records = self.records.write().await;
        let record = payment.with_id(records.len() as i64 + 1);
        records.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<PaymentRecord>, StoreError> {
        self.check()?;
        Ok(self.records.read().await.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}
