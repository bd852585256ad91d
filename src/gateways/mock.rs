use crate::error::GatewayError;
use crate::gateways::{Charge, ChargeGateway, ChargeRequest};
use std::str::FromStr;

pub const DECLINED_TOKEN_PREFIX: &str = "tok_declined";
pub const DECLINE_MESSAGE: &str = "Your card was declined.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MockBehavior {
    #[default]
    AlwaysSuccess,
    AlwaysDecline,
}

impl FromStr for MockBehavior {
    type Err = anyhow::Error;

    /// Case-insensitive; `ALWAYS_FAILURE` is accepted for `ALWAYS_DECLINE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALWAYS_SUCCESS" => Ok(Self::AlwaysSuccess),
            "ALWAYS_DECLINE" | "ALWAYS_FAILURE" => Ok(Self::AlwaysDecline),
            other => anyhow::bail!(
                "unknown MOCK_BEHAVIOR {:?}, expected ALWAYS_SUCCESS or ALWAYS_DECLINE",
                other
            ),
        }
    }
}

/// Offline gateway for local runs. Declines any `tok_declined*` token, and
/// everything under `MockBehavior::AlwaysDecline`.
#[derive(Default)]
pub struct MockGateway {
    pub behavior: MockBehavior,
}

#[async_trait::async_trait]
impl ChargeGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_charge(&self, request: ChargeRequest) -> Result<Charge, GatewayError> {
        if self.behavior == MockBehavior::AlwaysDecline || request.source.starts_with(DECLINED_TOKEN_PREFIX) {
            return Err(GatewayError::with_code(DECLINE_MESSAGE, "card_declined"));
        }

        Ok(Charge {
            id: format!("ch_{}", uuid::Uuid::new_v4().simple()),
            status: "succeeded".to_string(),
        })
    }
}
