use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::package_entity;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePackageRequest {
    #[schema(example = "Home Fiber 100")]
    pub name: String,
    #[schema(example = "100 Mbps")]
    pub speed: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 49.99)]
    pub price: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePackageRequest {
    #[schema(example = "Home Fiber 200")]
    pub name: Option<String>,
    #[schema(example = "200 Mbps")]
    pub speed: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>, example = 99.95)]
    pub price: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PackageResponse {
    pub id: i64,
    pub name: String,
    pub speed: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub active_duration: i32,
    pub created_at: DateTime<Utc>,
}

impl From<package_entity::Model> for PackageResponse {
    fn from(model: package_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            speed: model.speed,
            price: model.price,
            active_duration: model.active_duration,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_price_serializes_as_number() {
        let response = PackageResponse {
            id: 1,
            name: "Home Fiber 100".to_string(),
            speed: "100 Mbps".to_string(),
            price: Decimal::new(4999, 2),
            active_duration: 30,
            created_at: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["price"].is_number());
        assert_eq!(value["price"].as_f64().unwrap(), 49.99);
    }

    #[test]
    fn test_price_deserializes_from_number() {
        let request: CreatePackageRequest = serde_json::from_value(serde_json::json!({
            "name": "Home Fiber 100",
            "speed": "100 Mbps",
            "price": 49.99
        }))
        .unwrap();

        assert_eq!(request.price, Decimal::new(4999, 2));
    }

    #[test]
    fn test_update_request_price_is_optional() {
        let request: UpdatePackageRequest =
            serde_json::from_value(serde_json::json!({ "name": "Home Fiber 200" })).unwrap();

        assert_eq!(request.name.as_deref(), Some("Home Fiber 200"));
        assert!(request.price.is_none());
    }
}
