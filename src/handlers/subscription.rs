use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::SubscriptionService;

#[utoipa::path(
    post,
    path = "/subscriptions",
    tag = "subscriptions",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 200, description = "Subscription created with its pending transaction", body = SubscriptionResponse),
        (status = 404, description = "Member or package not found")
    )
)]
pub async fn create_subscription(
    subscription_service: web::Data<SubscriptionService>,
    request: web::Json<CreateSubscriptionRequest>,
) -> Result<HttpResponse> {
    match subscription_service
        .create_subscription(request.into_inner())
        .await
    {
        Ok(subscription) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": subscription
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/subscriptions",
    tag = "subscriptions",
    responses(
        (status = 200, description = "All subscriptions", body = [SubscriptionResponse])
    )
)]
pub async fn list_subscriptions(
    subscription_service: web::Data<SubscriptionService>,
) -> Result<HttpResponse> {
    match subscription_service.list_subscriptions().await {
        Ok(subscriptions) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": subscriptions
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn subscription_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/subscriptions")
            .route("", web::post().to(create_subscription))
            .route("", web::get().to(list_subscriptions)),
    );
}
