use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{subscription_entity, SubscriptionStatus};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSubscriptionRequest {
    #[schema(example = 1)]
    pub member_id: i64,
    #[schema(example = 1)]
    pub package_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionResponse {
    pub id: i64,
    pub member_id: i64,
    pub package_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<subscription_entity::Model> for SubscriptionResponse {
    fn from(model: subscription_entity::Model) -> Self {
        Self {
            id: model.id,
            member_id: model.member_id,
            package_id: model.package_id,
            start_date: model.start_date,
            end_date: model.end_date,
            status: model.status,
            created_at: model.created_at,
        }
    }
}
