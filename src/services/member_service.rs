use crate::entities::{
    member_entity as members, subscription_entity as subscriptions, SubscriptionStatus,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{hash_password, validate_email, validate_password};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct MemberService {
    pool: DatabaseConnection,
}

impl MemberService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_member(&self, request: CreateMemberRequest) -> AppResult<MemberResponse> {
        for (value, field) in [
            (&request.full_name, "full_name"),
            (&request.address, "address"),
            (&request.phone_number, "phone_number"),
            (&request.username, "username"),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Member {field} must not be empty"
                )));
            }
        }
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        let password_hash = hash_password(&request.password)?;

        let member = members::ActiveModel {
            full_name: Set(request.full_name),
            address: Set(request.address),
            phone_number: Set(request.phone_number),
            email: Set(request.email),
            username: Set(request.username),
            password_hash: Set(password_hash),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(MemberResponse::from(member))
    }

    pub async fn list_members(&self) -> AppResult<Vec<MemberResponse>> {
        let models = members::Entity::find()
            .order_by_asc(members::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(models.into_iter().map(MemberResponse::from).collect())
    }

    /// Apply only the provided fields. A provided password is hashed again,
    /// exactly as on creation.
    pub async fn update_member(
        &self,
        id: i64,
        request: UpdateMemberRequest,
    ) -> AppResult<MemberResponse> {
        for (value, field) in [
            (&request.full_name, "full_name"),
            (&request.address, "address"),
            (&request.phone_number, "phone_number"),
            (&request.username, "username"),
        ] {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(AppError::ValidationError(format!(
                        "Member {field} must not be empty"
                    )));
                }
            }
        }
        if let Some(email) = &request.email {
            validate_email(email)?;
        }
        if let Some(password) = &request.password {
            validate_password(password)?;
        }
        if request.full_name.is_none()
            && request.address.is_none()
            && request.phone_number.is_none()
            && request.email.is_none()
            && request.username.is_none()
            && request.password.is_none()
        {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }

        let mut model = members::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {id} not found")))?
            .into_active_model();

        if let Some(full_name) = request.full_name {
            model.full_name = Set(full_name);
        }
        if let Some(address) = request.address {
            model.address = Set(address);
        }
        if let Some(phone_number) = request.phone_number {
            model.phone_number = Set(phone_number);
        }
        if let Some(email) = request.email {
            model.email = Set(email);
        }
        if let Some(username) = request.username {
            model.username = Set(username);
        }
        if let Some(password) = request.password {
            model.password_hash = Set(hash_password(&password)?);
        }

        let updated = model.update(&self.pool).await?;

        Ok(MemberResponse::from(updated))
    }

    /// Delete a member and the member's remaining subscriptions. Any active
    /// subscription blocks the whole operation; the cascade over the
    /// expired ones and the member row commits as one unit.
    pub async fn delete_member(&self, id: i64) -> AppResult<()> {
        members::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {id} not found")))?;

        let active = subscriptions::Entity::find()
            .filter(subscriptions::Column::MemberId.eq(id))
            .filter(subscriptions::Column::Status.eq(SubscriptionStatus::Active))
            .one(&self.pool)
            .await?;

        if active.is_some() {
            return Err(AppError::Conflict(
                "Cannot delete member with active subscriptions".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        subscriptions::Entity::delete_many()
            .filter(subscriptions::Column::MemberId.eq(id))
            .exec(&txn)
            .await?;

        members::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn member_fixture() -> members::Model {
        members::Model {
            id: 1,
            full_name: "Jane Doe".to_string(),
            address: "12 Elm Street".to_string(),
            phone_number: "+15550100123".to_string(),
            email: "jane@example.com".to_string(),
            username: "janedoe".to_string(),
            password_hash: "$2b$12$fixture".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn subscription_fixture(status: SubscriptionStatus) -> subscriptions::Model {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        subscriptions::Model {
            id: 7,
            member_id: 1,
            package_id: 2,
            start_date: now,
            end_date: now + Duration::days(30),
            status,
            created_at: now,
        }
    }

    fn create_request() -> CreateMemberRequest {
        CreateMemberRequest {
            full_name: "Jane Doe".to_string(),
            address: "12 Elm Street".to_string(),
            phone_number: "+15550100123".to_string(),
            email: "jane@example.com".to_string(),
            username: "janedoe".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_member_rejects_bad_input() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = MemberService::new(db);

        let err = service
            .create_member(CreateMemberRequest {
                full_name: "".to_string(),
                ..create_request()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = service
            .create_member(CreateMemberRequest {
                email: "not-an-email".to_string(),
                ..create_request()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = service
            .create_member(CreateMemberRequest {
                password: "short".to_string(),
                ..create_request()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_member_stores_a_hash_not_the_password() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![member_fixture()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let service = MemberService::new(db.clone());
        service.create_member(create_request()).await.unwrap();

        // the plaintext must never reach an insert statement
        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("secret123"));
        assert!(log.contains("password_hash"));
    }

    #[tokio::test]
    async fn test_delete_member_with_active_subscription_is_blocked() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![member_fixture()]])
            .append_query_results([vec![subscription_fixture(SubscriptionStatus::Active)]])
            .into_connection();

        let service = MemberService::new(db);
        let err = service.delete_member(1).await.unwrap_err();

        match err {
            AppError::Conflict(msg) => assert!(msg.contains("active subscriptions")),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_member_cascades_expired_subscriptions() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![member_fixture()]])
            .append_query_results([Vec::<subscriptions::Model>::new()])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let service = MemberService::new(db);
        assert!(service.delete_member(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_member_unknown_id_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<members::Model>::new()])
            .into_connection();

        let service = MemberService::new(db);
        let err = service.delete_member(99).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
