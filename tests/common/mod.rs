use card_payments::error::GatewayError;
use card_payments::gateways::{Charge, ChargeGateway, ChargeRequest};
use card_payments::repo::in_memory::InMemoryPaymentStore;
use card_payments::service::payment_service::PaymentService;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Answers per token; unknown tokens succeed with `ch_<n>`.
#[derive(Default)]
pub struct ScriptedGateway {
    outcomes: Mutex<HashMap<String, Result<Charge, GatewayError>>>,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<ChargeRequest>>,
}

impl ScriptedGateway {
    pub fn succeed(self, token: &str, id: &str, status: &str) -> Self {
        self.outcomes.lock().unwrap().insert(
            token.to_string(),
            Ok(Charge {
                id: id.to_string(),
                status: status.to_string(),
            }),
        );
        self
    }

    pub fn decline(self, token: &str, message: &str) -> Self {
        self.outcomes.lock().unwrap().insert(
            token.to_string(),
            Err(GatewayError::with_code(message, "card_declined")),
        );
        self
    }
}

#[async_trait::async_trait]
impl ChargeGateway for ScriptedGateway {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn create_charge(&self, request: ChargeRequest) -> Result<Charge, GatewayError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let scripted = self.outcomes.lock().unwrap().get(&request.source).cloned();
        self.seen.lock().unwrap().push(request);
        scripted.unwrap_or_else(|| {
            Ok(Charge {
                id: format!("ch_{}", n),
                status: "succeeded".to_string(),
            })
        })
    }
}

pub fn scenario_gateway() -> ScriptedGateway {
    ScriptedGateway::default()
        .succeed("tok_valid", "ch_abc", "succeeded")
        .decline("tok_declined", "Your card was declined.")
}

pub fn service_with(
    gateway: ScriptedGateway,
) -> (PaymentService, Arc<ScriptedGateway>, InMemoryPaymentStore) {
    let gateway = Arc::new(gateway);
    let store = InMemoryPaymentStore::new();
    let service = PaymentService::new(gateway.clone(), Arc::new(store.clone()));
    (service, gateway, store)
}
