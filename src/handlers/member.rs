use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::MemberService;

#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMemberRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Member created", body = MemberResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_member(
    member_service: web::Data<MemberService>,
    request: web::Json<CreateMemberRequest>,
) -> Result<HttpResponse> {
    match member_service.create_member(request.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All members", body = [MemberResponse])
    )
)]
pub async fn list_members(member_service: web::Data<MemberService>) -> Result<HttpResponse> {
    match member_service.list_members().await {
        Ok(members) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": members
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    request_body = UpdateMemberRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Member updated", body = MemberResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    member_service: web::Data<MemberService>,
    path: web::Path<i64>,
    request: web::Json<UpdateMemberRequest>,
) -> Result<HttpResponse> {
    match member_service
        .update_member(path.into_inner(), request.into_inner())
        .await
    {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Member and expired subscriptions deleted"),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Member still has active subscriptions")
    )
)]
pub async fn delete_member(
    member_service: web::Data<MemberService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match member_service.delete_member(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "success": true }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn member_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .route("", web::post().to(create_member))
            .route("", web::get().to(list_members))
            .route("/{id}", web::put().to(update_member))
            .route("/{id}", web::delete().to(delete_member)),
    );
}
