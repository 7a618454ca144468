mod common;

use actix_web::{http::StatusCode, test};
use common::{create_app, TestContext};
use std::sync::Arc;
use user_management_service::server::AppState;
use user_management_service::store::UnavailableStore;

#[actix_web::test]
async fn health_reports_database_up() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(&ctx.state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "up");
    assert_eq!(body["service"], "user-management-service");
}

#[actix_web::test]
async fn health_reports_database_down() {
    let ctx = TestContext::new();
    let state = AppState::new(Arc::new(UnavailableStore::new("bad uri")), ctx.static_dir.path());
    let app = test::init_service(create_app(&state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "down");
}

#[actix_web::test]
async fn metrics_count_requests() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(&ctx.state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = String::from_utf8_lossy(&body);
    let requests: u64 = text
        .lines()
        .find_map(|line| line.strip_prefix("http_requests_total "))
        .and_then(|v| v.trim().parse().ok())
        .unwrap();
    assert!(requests >= 2);
}

#[actix_web::test]
async fn auth_scope_without_router_is_not_implemented() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(&ctx.state)).await;

    let req = test::TestRequest::post().uri("/api/auth/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
}

#[actix_web::test]
async fn auth_scope_mounts_custom_router() {
    use actix_web::{web, HttpResponse};

    fn auth_routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/login", web::post().to(|| async { HttpResponse::Ok().body("token") }));
    }

    let ctx = TestContext::new();
    let state = ctx.state.clone().with_auth_routes(auth_routes);
    let app = test::init_service(create_app(&state)).await;

    let req = test::TestRequest::post().uri("/api/auth/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "token".as_bytes());
}

#[actix_web::test]
async fn cors_allows_any_origin() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(&ctx.state)).await;

    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header(("Origin", "https://dashboard.example.org"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key("access-control-allow-origin"));
}
