use crate::domain::payment::{NewPayment, PaymentRecord, PaymentRequest};
use crate::error::{PaymentError, StoreError};
use crate::gateways::{Charge, ChargeGateway, ChargeRequest};
use crate::repo::PaymentStore;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct PaymentService {
    gateway: Arc<dyn ChargeGateway>,
    store: Arc<dyn PaymentStore>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn ChargeGateway>, store: Arc<dyn PaymentStore>) -> Self {
        Self { gateway, store }
    }

    /// Charges the source once and records the outcome.
    ///
    /// Nothing is stored when the gateway call fails. A store failure after a
    /// successful charge leaves a charge the ledger does not know about; it is
    /// logged with the charge id and returned as `PaymentError::Store`.
    pub async fn process_payment(
        &self,
        request: PaymentRequest,
        source_token: &str,
    ) -> Result<Charge, PaymentError> {
        request.validate(source_token)?;

        let charge_request = ChargeRequest {
            amount: request.amount,
            currency: request.currency.clone(),
            description: request.description.clone(),
            source: source_token.trim().to_string(),
        };

        let start = Instant::now();
        let charge = match self.gateway.create_charge(charge_request).await {
            Ok(charge) => charge,
            Err(e) => {
                tracing::warn!(
                    gateway = self.gateway.name(),
                    code = e.code.as_deref().unwrap_or("-"),
                    latency_ms = start.elapsed().as_millis() as u64,
                    "charge rejected: {}",
                    e
                );
                return Err(e.into());
            }
        };
        tracing::info!(
            gateway = self.gateway.name(),
            charge_id = %charge.id,
            status = %charge.status,
            latency_ms = start.elapsed().as_millis() as u64,
            "charge created"
        );

        let payment = NewPayment::from_charge(&request, &charge);
        match self.store.save(payment).await {
            Ok(record) => {
                tracing::debug!(payment_id = record.id(), charge_id = %charge.id, "payment recorded");
                Ok(charge)
            }
            Err(e) => {
                tracing::error!(
                    charge_id = %charge.id,
                    amount = request.amount,
                    currency = %request.currency,
                    "charge succeeded but could not be recorded: {}",
                    e
                );
                Err(e.into())
            }
        }
    }

    pub async fn list_payments(&self) -> Result<Vec<PaymentRecord>, StoreError> {
        self.store.list_all().await
    }

    pub async fn store_ready(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}
