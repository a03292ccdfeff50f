use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::member_entity;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[schema(example = "12 Elm Street")]
    pub address: String,
    #[schema(example = "+15550100123")]
    pub phone_number: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "janedoe")]
    pub username: String,
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateMemberRequest {
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    #[schema(example = "secret123")]
    pub password: Option<String>,
}

/// Admin-console view of a member. Carries the bcrypt hash, never the
/// plaintext; keeping it out of external responses is the caller's call.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: i64,
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<member_entity::Model> for MemberResponse {
    fn from(model: member_entity::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            address: model.address,
            phone_number: model.phone_number,
            email: model.email,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
