use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::services::TransactionService;

#[utoipa::path(
    get,
    path = "/transactions",
    tag = "transactions",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All transactions", body = [TransactionResponse])
    )
)]
pub async fn list_transactions(
    transaction_service: web::Data<TransactionService>,
) -> Result<HttpResponse> {
    match transaction_service.list_transactions().await {
        Ok(transactions) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": transactions
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/transactions/member/{member_id}",
    tag = "transactions",
    params(
        ("member_id" = i64, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "The member's transactions, empty for unknown members", body = [TransactionResponse])
    )
)]
pub async fn list_transactions_by_member(
    transaction_service: web::Data<TransactionService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match transaction_service
        .list_transactions_by_member(path.into_inner())
        .await
    {
        Ok(transactions) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": transactions
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn transaction_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/transactions")
            .route("", web::get().to(list_transactions))
            .route("/member/{member_id}", web::get().to(list_transactions_by_member)),
    );
}
