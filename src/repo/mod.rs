use crate::domain::payment::{NewPayment, PaymentRecord};
use crate::error::StoreError;

pub mod in_memory;
pub mod payments_repo;

#[async_trait::async_trait]
pub trait PaymentStore: Send + Sync {
    /// Inserts once and returns the record with its assigned id.
    async fn save(&self, payment: NewPayment) -> Result<PaymentRecord, StoreError>;

    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<PaymentRecord>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
