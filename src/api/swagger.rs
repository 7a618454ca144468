use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "1.0.0",
        description = "Registers and lists users of the dashboard. Unmatched GET paths serve the single-page frontend."
    ),
    paths(
        crate::api::users::add_user,
        crate::api::users::list_users,
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::AddUserRequest,
            crate::models::UserResponse,
            crate::models::UsersResponse,
            crate::models::MessageResponse,
            crate::utils::error::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration and listing."),
        (name = "Health", description = "Health check and metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
