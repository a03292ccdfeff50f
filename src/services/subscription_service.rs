use crate::entities::{
    member_entity as members, package_entity as packages, subscription_entity as subscriptions,
    transaction_entity as transactions, SubscriptionStatus,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};

/// Derive the validity window and initial status for a subscription taken
/// out at `now` on a package with the given duration in days. Status is
/// fixed here and never re-evaluated afterwards.
pub fn subscription_window(
    now: DateTime<Utc>,
    active_duration: i32,
) -> (DateTime<Utc>, DateTime<Utc>, SubscriptionStatus) {
    let start_date = now;
    let end_date = start_date + Duration::days(active_duration as i64);

    let status = if end_date < now {
        SubscriptionStatus::Expired
    } else {
        SubscriptionStatus::Active
    };

    (start_date, end_date, status)
}

#[derive(Clone)]
pub struct SubscriptionService {
    pool: DatabaseConnection,
}

impl SubscriptionService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Take out a subscription for a member on a package, billing it with a
    /// pending transaction in the same database transaction.
    pub async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> AppResult<SubscriptionResponse> {
        members::Entity::find_by_id(request.member_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let package = packages::Entity::find_by_id(request.package_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Package not found".to_string()))?;

        let (start_date, end_date, status) =
            subscription_window(Utc::now(), package.active_duration);

        // a subscription never lands without its payment record
        let txn = self.pool.begin().await?;

        let subscription = subscriptions::ActiveModel {
            member_id: Set(request.member_id),
            package_id: Set(request.package_id),
            start_date: Set(start_date),
            end_date: Set(end_date),
            status: Set(status),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        transactions::ActiveModel {
            subscription_id: Set(subscription.id),
            transaction_date: Set(start_date),
            amount: Set(package.price),
            payment_status: Set("pending".to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(SubscriptionResponse::from(subscription))
    }

    pub async fn list_subscriptions(&self) -> AppResult<Vec<SubscriptionResponse>> {
        let models = subscriptions::Entity::find()
            .order_by_asc(subscriptions::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(models
            .into_iter()
            .map(SubscriptionResponse::from)
            .collect())
    }
}
