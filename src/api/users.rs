use actix_web::{web, HttpResponse};

use crate::{
    models::{AddUserRequest, MessageResponse, UserResponse, UsersResponse},
    services::user_service,
    store::UserStore,
    utils::error::{AppError, ErrorResponse},
};

#[utoipa::path(
    post,
    path = "/api/add-user",
    tag = "Users",
    request_body = AddUserRequest,
    responses(
        (status = 201, description = "User added", body = MessageResponse),
        (status = 400, description = "Missing fields or user already exists", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn add_user(
    store: web::Data<dyn UserStore>,
    request: web::Json<AddUserRequest>,
) -> Result<HttpResponse, AppError> {
    let email = request.email.as_deref().unwrap_or("N/A").to_string();
    log::info!("📝 POST /api/add-user - email: {}", email);

    let new_user = request.into_inner().validate()?;

    match user_service::add_user(store.get_ref(), new_user).await {
        Ok(()) => {
            log::info!("✅ User added: {}", email);
            Ok(HttpResponse::Created().json(MessageResponse {
                success: true,
                message: "User added successfully".to_string(),
            }))
        }
        Err(e) => {
            log::warn!("❌ Add user failed: {} - {}", email, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = UsersResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn list_users(store: web::Data<dyn UserStore>) -> Result<HttpResponse, AppError> {
    log::info!("👥 GET /api/users");

    let users = user_service::list_users(store.get_ref()).await?;

    Ok(HttpResponse::Ok().json(UsersResponse {
        success: true,
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}
