use crate::entities::{subscription_entity as subscriptions, transaction_entity as transactions};
use crate::error::AppResult;
use crate::models::*;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

#[derive(Clone)]
pub struct TransactionService {
    pool: DatabaseConnection,
}

impl TransactionService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_transactions(&self) -> AppResult<Vec<TransactionResponse>> {
        let models = transactions::Entity::find()
            .order_by_asc(transactions::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(models.into_iter().map(TransactionResponse::from).collect())
    }

    /// All transactions billed against the member's subscriptions. An
    /// unknown member id simply yields an empty list.
    pub async fn list_transactions_by_member(
        &self,
        member_id: i64,
    ) -> AppResult<Vec<TransactionResponse>> {
        let subscription_ids: Vec<i64> = subscriptions::Entity::find()
            .filter(subscriptions::Column::MemberId.eq(member_id))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|subscription| subscription.id)
            .collect();

        if subscription_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = transactions::Entity::find()
            .filter(transactions::Column::SubscriptionId.is_in(subscription_ids))
            .order_by_asc(transactions::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(models.into_iter().map(TransactionResponse::from).collect())
    }
}
