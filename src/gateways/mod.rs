use crate::error::GatewayError;
use serde::{Deserialize, Serialize};

pub mod mock;
pub mod stripe;

#[derive(Debug, Clone, Serialize)]
pub struct ChargeRequest {
    pub amount: i64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: String,
}

/// Gateway's answer for an accepted charge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Charge {
    pub id: String,
    pub status: String,
}

/// A single charge submission. Implementations make one attempt; any retry
/// policy belongs to the remote side.
#[async_trait::async_trait]
pub trait ChargeGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_charge(&self, request: ChargeRequest) -> Result<Charge, GatewayError>;
}
