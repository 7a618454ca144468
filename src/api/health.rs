use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::store::UserStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up; `database` reports the store", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn UserStore>) -> HttpResponse {
    let (status, database) = match store.ping().await {
        Ok(()) => ("healthy", "up"),
        Err(e) => {
            log::warn!("⚠️  Health check: store unreachable - {}", e);
            ("degraded", "down")
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
