use crate::http::handlers::{ops, payments};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/pay", post(payments::submit_payment))
        .route("/payments", get(payments::list_payments));

    Router::new()
        .route("/health", get(payments::health))
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
