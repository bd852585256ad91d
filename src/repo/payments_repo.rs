use crate::domain::payment::{NewPayment, PaymentRecord};
use crate::error::StoreError;
use crate::repo::PaymentStore;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct PaymentsRepo {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl PaymentStore for PaymentsRepo {
    async fn save(&self, payment: NewPayment) -> Result<PaymentRecord, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO payments (charge_id, amount, currency, description, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(payment.charge_id())
        .bind(payment.amount())
        .bind(payment.currency())
        .bind(payment.description())
        .bind(payment.status())
        .fetch_one(&self.pool)
        .await?;

        Ok(payment.with_id(row.get("id")))
    }

    async fn list_all(&self) -> Result<Vec<PaymentRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, charge_id, amount, currency, description, status FROM payments ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let payment = NewPayment::from_parts(
                    r.get("charge_id"),
                    r.get("amount"),
                    r.get("currency"),
                    r.get("description"),
                    r.get("status"),
                );
                payment.with_id(r.get("id"))
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
