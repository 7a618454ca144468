//! Mount point for the authentication routes under `/api/auth`.
//!
//! Token issuance and validation live outside this service. The server takes the auth
//! routes as a `RouteConfig` so a real implementation can be plugged in; `unavailable`
//! is used when none is.

use actix_web::{http::StatusCode, web, HttpResponse};

use crate::utils::error::ErrorResponse;

pub const AUTH_SCOPE: &str = "/api/auth";

pub type RouteConfig = fn(&mut web::ServiceConfig);

/// Answers every auth request with 501.
pub fn unavailable(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::to(not_implemented))
        .route("/{tail:.*}", web::to(not_implemented));
}

async fn not_implemented() -> HttpResponse {
    HttpResponse::build(StatusCode::NOT_IMPLEMENTED).json(ErrorResponse {
        success: false,
        message: "Authentication is not configured on this server.".to_string(),
    })
}
