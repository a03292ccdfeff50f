use crate::entities::{package_entity as packages, subscription_entity as subscriptions};
use crate::error::{AppError, AppResult};
use crate::models::*;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

/// Every package sold through the public creation flow runs for 30 days.
pub const DEFAULT_ACTIVE_DURATION_DAYS: i32 = 30;

#[derive(Clone)]
pub struct PackageService {
    pool: DatabaseConnection,
}

impl PackageService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_package(
        &self,
        request: CreatePackageRequest,
    ) -> AppResult<PackageResponse> {
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Package name must not be empty".to_string(),
            ));
        }
        if request.speed.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Package speed must not be empty".to_string(),
            ));
        }
        if request.price <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "Package price must be positive".to_string(),
            ));
        }

        let package = packages::ActiveModel {
            name: Set(request.name),
            speed: Set(request.speed),
            price: Set(request.price),
            active_duration: Set(DEFAULT_ACTIVE_DURATION_DAYS),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(PackageResponse::from(package))
    }

    pub async fn list_packages(&self) -> AppResult<Vec<PackageResponse>> {
        let models = packages::Entity::find()
            .order_by_asc(packages::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(models.into_iter().map(PackageResponse::from).collect())
    }

    /// Apply only the provided fields; `active_duration` is not mutable here.
    pub async fn update_package(
        &self,
        id: i64,
        request: UpdatePackageRequest,
    ) -> AppResult<PackageResponse> {
        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Package name must not be empty".to_string(),
                ));
            }
        }
        if let Some(speed) = &request.speed {
            if speed.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Package speed must not be empty".to_string(),
                ));
            }
        }
        if let Some(price) = &request.price {
            if *price <= Decimal::ZERO {
                return Err(AppError::ValidationError(
                    "Package price must be positive".to_string(),
                ));
            }
        }
        if request.name.is_none() && request.speed.is_none() && request.price.is_none() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }

        let mut model = packages::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Package with id {id} not found")))?
            .into_active_model();

        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if let Some(speed) = request.speed {
            model.speed = Set(speed);
        }
        if let Some(price) = request.price {
            model.price = Set(price);
        }

        let updated = model.update(&self.pool).await?;

        Ok(PackageResponse::from(updated))
    }

    pub async fn delete_package(&self, id: i64) -> AppResult<()> {
        packages::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Package with id {id} not found")))?;

        // any referencing subscription blocks deletion, expired ones included
        let referencing = subscriptions::Entity::find()
            .filter(subscriptions::Column::PackageId.eq(id))
            .one(&self.pool)
            .await?;

        if referencing.is_some() {
            return Err(AppError::Conflict(
                "Cannot delete package that is referenced by existing subscriptions".to_string(),
            ));
        }

        packages::Entity::delete_by_id(id).exec(&self.pool).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SubscriptionStatus;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn package_fixture() -> packages::Model {
        packages::Model {
            id: 2,
            name: "Home Fiber 100".to_string(),
            speed: "100 Mbps".to_string(),
            price: Decimal::new(4999, 2),
            active_duration: 30,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn subscription_fixture(package_id: i64, status: SubscriptionStatus) -> subscriptions::Model {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        subscriptions::Model {
            id: 7,
            member_id: 1,
            package_id,
            start_date: now,
            end_date: now + chrono::Duration::days(30),
            status,
            created_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_package_rejects_bad_input() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = PackageService::new(db);

        for request in [
            CreatePackageRequest {
                name: "".to_string(),
                speed: "100 Mbps".to_string(),
                price: Decimal::new(4999, 2),
            },
            CreatePackageRequest {
                name: "Home Fiber 100".to_string(),
                speed: "  ".to_string(),
                price: Decimal::new(4999, 2),
            },
            CreatePackageRequest {
                name: "Home Fiber 100".to_string(),
                speed: "100 Mbps".to_string(),
                price: Decimal::ZERO,
            },
            CreatePackageRequest {
                name: "Home Fiber 100".to_string(),
                speed: "100 Mbps".to_string(),
                price: Decimal::new(-100, 2),
            },
        ] {
            let err = service.create_package(request).await.unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)));
        }
    }

    #[tokio::test]
    async fn test_create_package_forces_thirty_day_duration() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![package_fixture()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 2,
                rows_affected: 1,
            }])
            .into_connection();

        let service = PackageService::new(db.clone());
        let response = service
            .create_package(CreatePackageRequest {
                name: "Home Fiber 100".to_string(),
                speed: "100 Mbps".to_string(),
                price: Decimal::new(4999, 2),
            })
            .await
            .unwrap();

        assert_eq!(response.active_duration, 30);

        // the insert statement itself must pin the duration to 30
        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("active_duration"));
        assert!(log.contains("Int(Some(30))"));
    }

    #[tokio::test]
    async fn test_update_package_applies_only_provided_fields() {
        let updated = packages::Model {
            price: Decimal::new(9995, 2),
            ..package_fixture()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![package_fixture()]])
            .append_query_results([vec![updated]])
            .append_exec_results([MockExecResult {
                last_insert_id: 2,
                rows_affected: 1,
            }])
            .into_connection();

        let service = PackageService::new(db);
        let response = service
            .update_package(
                2,
                UpdatePackageRequest {
                    name: None,
                    speed: None,
                    price: Some(Decimal::new(9995, 2)),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.price, Decimal::new(9995, 2));
        assert_eq!(response.name, "Home Fiber 100");
        assert_eq!(response.speed, "100 Mbps");
        assert_eq!(response.active_duration, 30);
    }

    #[tokio::test]
    async fn test_update_package_unknown_id_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<packages::Model>::new()])
            .into_connection();

        let service = PackageService::new(db);
        let err = service
            .update_package(
                99,
                UpdatePackageRequest {
                    name: Some("Home Fiber 200".to_string()),
                    speed: None,
                    price: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_package_referenced_by_subscription_is_blocked() {
        // an expired subscription blocks deletion just as an active one does
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![package_fixture()]])
            .append_query_results([vec![subscription_fixture(2, SubscriptionStatus::Expired)]])
            .into_connection();

        let service = PackageService::new(db);
        let err = service.delete_package(2).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_package_without_references_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![package_fixture()]])
            .append_query_results([Vec::<subscriptions::Model>::new()])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let service = PackageService::new(db);
        assert!(service.delete_package(2).await.is_ok());
    }
}
