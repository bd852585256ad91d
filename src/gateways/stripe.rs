use crate::error::GatewayError;
use crate::gateways::{Charge, ChargeGateway, ChargeRequest};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

pub struct StripeGateway {
    pub base_url: String,
    pub api_key: Secret<String>,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

#[async_trait::async_trait]
impl ChargeGateway for StripeGateway {
    fn name(&self) -> &'static str {
        "stripe"
    }

    async fn create_charge(&self, request: ChargeRequest) -> Result<Charge, GatewayError> {
        let url = format!("{}/v1/charges", self.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .form(&request)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => r.json::<Charge>().await.map_err(|e| {
                GatewayError::new(format!("unreadable charge response: {}", e))
            }),
            Ok(r) => {
                let status = r.status();
                let body = match r.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        tracing::debug!(status = status.as_u16(), "could not read error body: {}", e);
                        String::new()
                    }
                };
                Err(parse_error(status, &body))
            }
            Err(e) if e.is_timeout() => Err(GatewayError::with_code("gateway timeout", "TIMEOUT")),
            Err(e) => Err(GatewayError::with_code(e.to_string(), "NETWORK_ERROR")),
        }
    }
}

fn parse_error(status: StatusCode, body: &str) -> GatewayError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let code = parsed
        .as_ref()
        .and_then(|e| e.error.code.clone())
        .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));

    match parsed.and_then(|e| e.error.message) {
        Some(message) if !message.trim().is_empty() => GatewayError::with_code(message, code),
        _ if body.trim().is_empty() => {
            GatewayError::with_code(format!("gateway returned HTTP {}", status), code)
        }
        _ => GatewayError::with_code(body.chars().take(200).collect::<String>(), code),
    }
}
