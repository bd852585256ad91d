use crate::domain::payment::PaymentRequest;
use crate::error::PaymentError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PayParams {
    pub token: String,
}

pub async fn submit_payment(
    State(state): State<AppState>,
    Query(params): Query<PayParams>,
    Json(req): Json<PaymentRequest>,
) -> Response {
    match state.payment_service.process_payment(req, &params.token).await {
        Ok(charge) => (
            StatusCode::OK,
            format!("Payment Successful! chargeId:{}", charge.id),
        )
            .into_response(),
        Err(e @ (PaymentError::Gateway(_) | PaymentError::Validation(_))) => {
            (StatusCode::BAD_REQUEST, format!("PaymentFailed!:{}", e)).into_response()
        }
        Err(PaymentError::Store(e)) => internal(e),
    }
}

pub async fn list_payments(State(state): State<AppState>) -> Response {
    match state.payment_service.list_payments().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => internal(e),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn internal(e: impl std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": e.to_string()})),
    )
        .into_response()
}
