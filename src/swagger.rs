use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::SubscriptionStatus;
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::package::create_package,
        handlers::package::list_packages,
        handlers::package::update_package,
        handlers::package::delete_package,
        handlers::member::create_member,
        handlers::member::list_members,
        handlers::member::update_member,
        handlers::member::delete_member,
        handlers::subscription::create_subscription,
        handlers::subscription::list_subscriptions,
        handlers::transaction::list_transactions,
        handlers::transaction::list_transactions_by_member,
        handlers::health::healthcheck,
    ),
    components(
        schemas(
            CreatePackageRequest,
            UpdatePackageRequest,
            PackageResponse,
            CreateMemberRequest,
            UpdateMemberRequest,
            MemberResponse,
            CreateSubscriptionRequest,
            SubscriptionResponse,
            SubscriptionStatus,
            TransactionResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "packages", description = "Package catalogue API"),
        (name = "members", description = "Member management API"),
        (name = "subscriptions", description = "Subscription API"),
        (name = "transactions", description = "Transaction reporting API"),
        (name = "health", description = "Liveness probe"),
    ),
    info(
        title = "Netlink Backend API",
        version = "1.0.0",
        description = "ISP subscription manager REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
