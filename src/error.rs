use thiserror::Error;

/// Rejection or transport failure reported by the payment gateway.
///
/// `Display` is the gateway's message verbatim; clients see it in the
/// `PaymentFailed!:` response body.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
    pub code: Option<String>,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("payment store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
