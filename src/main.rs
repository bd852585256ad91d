use card_payments::config::{AppConfig, GatewayAdapter, StoreBackend};
use card_payments::gateways::mock::MockGateway;
use card_payments::gateways::stripe::StripeGateway;
use card_payments::gateways::ChargeGateway;
use card_payments::http::router::build_router;
use card_payments::repo::in_memory::InMemoryPaymentStore;
use card_payments::repo::payments_repo::PaymentsRepo;
use card_payments::repo::PaymentStore;
use card_payments::service::payment_service::PaymentService;
use card_payments::AppState;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => anyhow::bail!("invalid configuration: {}", e),
    };

    let store: Arc<dyn PaymentStore> = match cfg.payment_store {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory payment store; records are lost on restart");
            Arc::new(InMemoryPaymentStore::new())
        }
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(&cfg.database_url)
                .await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            Arc::new(PaymentsRepo { pool })
        }
    };

    let gateway: Arc<dyn ChargeGateway> = match cfg.gateway_adapter {
        GatewayAdapter::Mock => Arc::new(MockGateway {
            behavior: cfg.mock_behavior,
        }),
        GatewayAdapter::Stripe => {
            if cfg.stripe_api_key.expose_secret().is_empty() {
                anyhow::bail!("STRIPE_API_KEY must be set when GATEWAY_ADAPTER=STRIPE");
            }
            Arc::new(StripeGateway {
                base_url: cfg.stripe_base_url.clone(),
                api_key: cfg.stripe_api_key.clone(),
                timeout_ms: cfg.gateway_timeout_ms,
                client: reqwest::Client::new(),
            })
        }
    };
    tracing::info!(gateway = gateway.name(), store = ?cfg.payment_store, "payment service configured");

    let state = AppState {
        payment_service: PaymentService::new(gateway, store),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
