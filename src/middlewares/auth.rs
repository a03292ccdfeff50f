use crate::error::AppError;
use actix_web::http::Method;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

/// The part of the API reserved for operators. Browsing packages,
/// subscribing and reading a member's own transactions stay open.
struct AdminSurface;

impl AdminSurface {
    fn requires_admin(&self, method: &Method, path: &str) -> bool {
        if method == Method::OPTIONS {
            return false;
        }
        if path.starts_with("/api/v1/packages") {
            // the catalogue is public to browse, admin to change
            return method != Method::GET;
        }
        if path.starts_with("/api/v1/members") {
            return true;
        }
        if path == "/api/v1/transactions" || path == "/api/v1/transactions/" {
            return true;
        }
        false
    }
}

pub struct AuthMiddleware {
    admin_token: String,
}

impl AuthMiddleware {
    pub fn new(admin_token: String) -> Self {
        Self { admin_token }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            admin_token: self.admin_token.clone(),
            admin_surface: AdminSurface,
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    admin_token: String,
    admin_surface: AdminSurface,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // an empty configured token disables the check (development mode)
        if self.admin_token.is_empty()
            || !self
                .admin_surface
                .requires_admin(req.method(), req.path())
        {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let auth_header = req.headers().get("Authorization");

        let token = if let Some(auth_value) = auth_header {
            if let Ok(auth_str) = auth_value.to_str() {
                auth_str.strip_prefix("Bearer ")
            } else {
                None
            }
        } else {
            None
        };

        match token {
            Some(token) if token == self.admin_token => {
                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Some(_) => {
                let error = AppError::AuthError("Invalid admin token".to_string());
                Box::pin(async move { Err(error.into()) })
            }
            None => {
                let error = AppError::AuthError("Missing admin token".to_string());
                Box::pin(async move { Err(error.into()) })
            }
        }
    }
}
