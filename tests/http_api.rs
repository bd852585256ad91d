mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use card_payments::http::router::build_router;
use card_payments::repo::in_memory::InMemoryPaymentStore;
use card_payments::AppState;
use common::{scenario_gateway, service_with};
use tower::util::ServiceExt;

fn app() -> (Router, InMemoryPaymentStore) {
    let (service, _, store) = service_with(scenario_gateway());
    let router = build_router(AppState {
        payment_service: service,
    });
    (router, store)
}

fn pay(token: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/pay?token={}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list() -> Request<Body> {
    Request::builder()
        .uri("/api/payments")
        .body(Body::empty())
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const ORDER_1: &str = r#"{"amount":1000,"currency":"usd","description":"order #1"}"#;

#[tokio::test]
async fn successful_payment_then_history_contains_it() {
    let (app, _) = app();

    let response = app.clone().oneshot(pay("tok_valid", ORDER_1)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Payment Successful! chargeId:ch_abc");

    let response = app.oneshot(list()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let records: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
        records,
        serde_json::json!([{
            "id": 1,
            "chargeId": "ch_abc",
            "amount": 1000,
            "currency": "usd",
            "description": "order #1",
            "status": "succeeded"
        }])
    );
}

#[tokio::test]
async fn declined_payment_returns_400_and_records_nothing() {
    let (app, _) = app();

    let response = app.clone().oneshot(pay("tok_declined", ORDER_1)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "PaymentFailed!:Your card was declined.");

    let response = app.oneshot(list()).await.unwrap();
    assert_eq!(body_text(response).await, "[]");
}

#[tokio::test]
async fn invalid_amount_is_rejected_before_charging() {
    let (app, _) = app();

    let response = app
        .clone()
        .oneshot(pay("tok_valid", r#"{"amount":0,"currency":"usd","description":"x"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.starts_with("PaymentFailed!:"));

    let response = app.oneshot(list()).await.unwrap();
    assert_eq!(body_text(response).await, "[]");
}

#[tokio::test]
async fn missing_token_is_a_client_error() {
    let (app, _) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/pay")
        .header("content-type", "application/json")
        .body(Body::from(ORDER_1))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn store_outage_maps_to_500() {
    let (app, store) = app();
    store.set_unavailable(true);

    let response = app.clone().oneshot(pay("tok_valid", ORDER_1)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app.oneshot(list()).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn readiness_follows_store_health() {
    let (app, store) = app();
    let ready = || {
        Request::builder()
            .uri("/ops/readiness")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(ready()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    store.set_unavailable(true);
    let response = app.clone().oneshot(ready()).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = app
        .oneshot(Request::builder().uri("/ops/liveness").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
