use crate::error::PaymentError;
use crate::gateways::Charge;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl PaymentRequest {
    /// Rejects input that would waste a real charge attempt at the gateway.
    pub fn validate(&self, source_token: &str) -> Result<(), PaymentError> {
        if self.amount <= 0 {
            return Err(PaymentError::Validation(
                "amount must be a positive integer in minor units".to_string(),
            ));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PaymentError::Validation(
                "currency must be a 3-letter code".to_string(),
            ));
        }

        let token = source_token.trim();
        if token.is_empty() {
            return Err(PaymentError::Validation("token is required".to_string()));
        }
        if looks_like_card_number(token) {
            return Err(PaymentError::Validation(
                "token must be a tokenized payment source, not a card number".to_string(),
            ));
        }
        Ok(())
    }
}

fn looks_like_card_number(token: &str) -> bool {
    (12..=19).contains(&token.len()) && token.chars().all(|c| c.is_ascii_digit())
}

/// A charge that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    charge_id: String,
    amount: i64,
    currency: String,
    description: Option<String>,
    status: String,
}

impl NewPayment {
    pub fn from_charge(request: &PaymentRequest, charge: &Charge) -> Self {
        Self {
            charge_id: charge.id.clone(),
            amount: request.amount,
            currency: request.currency.clone(),
            description: request.description.clone(),
            status: charge.status.clone(),
        }
    }

    /// Rebuilds a payment from stored columns.
    pub fn from_parts(
        charge_id: String,
        amount: i64,
        currency: String,
        description: Option<String>,
        status: String,
    ) -> Self {
        Self {
            charge_id,
            amount,
            currency,
            description,
            status,
        }
    }

    pub fn charge_id(&self) -> &str {
        &self.charge_id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Attaches the store-assigned identity.
    pub fn with_id(self, id: i64) -> PaymentRecord {
        PaymentRecord {
            id,
            charge_id: self.charge_id,
            amount: self.amount,
            currency: self.currency,
            description: self.description,
            status: self.status,
        }
    }
}

/// A persisted charge. Never mutated after the store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    id: i64,
    charge_id: String,
    amount: i64,
    currency: String,
    description: Option<String>,
    status: String,
}

impl PaymentRecord {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn charge_id(&self) -> &str {
        &self.charge_id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
