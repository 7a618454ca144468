//! App wiring: middleware, API routes, auth mount and the SPA fallback.

use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, http::header, web, HttpRequest};
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{self, auth::RouteConfig},
    store::UserStore,
    utils::error::AppError,
};

/// Everything the routes need, built once at startup and shared by all workers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub static_dir: PathBuf,
    pub auth_routes: RouteConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            static_dir: static_dir.into(),
            auth_routes: api::auth::unavailable,
        }
    }

    pub fn with_auth_routes(mut self, auth_routes: RouteConfig) -> Self {
        self.auth_routes = auth_routes;
        self
    }
}

/// Cross-origin policy: any origin, method and header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .expose_headers(vec![header::CONTENT_TYPE])
        .max_age(3600)
}

/// JSON bodies that fail to parse are rejected as validation errors before a handler runs.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("⚠️  Rejected JSON body on {}: {}", req.path(), err);
    AppError::Validation("Invalid JSON body.".to_string()).into()
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    let openapi = api::swagger::ApiDoc::openapi();

    cfg.app_data(web::Data::from(state.store.clone()))
        .app_data(json_config())
        .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
        .route("/health", web::get().to(api::health::health_check))
        .route("/metrics", web::get().to(api::metrics::get_metrics))
        .service(web::scope(api::auth::AUTH_SCOPE).configure(state.auth_routes))
        // Plain routes, not a scope: unknown /api paths still reach the SPA fallback
        .route("/api/add-user", web::post().to(api::users::add_user))
        .route("/api/users", web::get().to(api::users::list_users))
        // Keep last: catches every path not matched above
        .service(api::frontend::service(&state.static_dir));
}
