use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::PackageService;

#[utoipa::path(
    post,
    path = "/packages",
    tag = "packages",
    request_body = CreatePackageRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Package created", body = PackageResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Missing or invalid admin token")
    )
)]
pub async fn create_package(
    package_service: web::Data<PackageService>,
    request: web::Json<CreatePackageRequest>,
) -> Result<HttpResponse> {
    match package_service.create_package(request.into_inner()).await {
        Ok(package) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": package
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/packages",
    tag = "packages",
    responses(
        (status = 200, description = "All packages", body = [PackageResponse])
    )
)]
pub async fn list_packages(package_service: web::Data<PackageService>) -> Result<HttpResponse> {
    match package_service.list_packages().await {
        Ok(packages) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": packages
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/packages/{id}",
    tag = "packages",
    params(
        ("id" = i64, Path, description = "Package id")
    ),
    request_body = UpdatePackageRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Package updated", body = PackageResponse),
        (status = 404, description = "Package not found")
    )
)]
pub async fn update_package(
    package_service: web::Data<PackageService>,
    path: web::Path<i64>,
    request: web::Json<UpdatePackageRequest>,
) -> Result<HttpResponse> {
    match package_service
        .update_package(path.into_inner(), request.into_inner())
        .await
    {
        Ok(package) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": package
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/packages/{id}",
    tag = "packages",
    params(
        ("id" = i64, Path, description = "Package id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Package deleted"),
        (status = 404, description = "Package not found"),
        (status = 409, description = "Package is referenced by subscriptions")
    )
)]
pub async fn delete_package(
    package_service: web::Data<PackageService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match package_service.delete_package(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "success": true }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn package_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/packages")
            .route("", web::post().to(create_package))
            .route("", web::get().to(list_packages))
            .route("/{id}", web::put().to(update_package))
            .route("/{id}", web::delete().to(delete_package)),
    );
}
