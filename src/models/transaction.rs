use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::transaction_entity;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub id: i64,
    pub subscription_id: i64,
    pub transaction_date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
    #[schema(example = "pending")]
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<transaction_entity::Model> for TransactionResponse {
    fn from(model: transaction_entity::Model) -> Self {
        Self {
            id: model.id,
            subscription_id: model.subscription_id,
            transaction_date: model.transaction_date,
            amount: model.amount,
            payment_status: model.payment_status,
            created_at: model.created_at,
        }
    }
}
