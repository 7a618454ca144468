use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failure surfaced at the HTTP boundary.
///
/// `Validation` and `Conflict` carry a message that is safe to show to the caller.
/// `Internal` keeps the real cause in `detail`, which is logged but never serialized.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>, detail: impl ToString) -> Self {
        AppError::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Message returned to the caller.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => msg,
            AppError::Internal { message, .. } => message,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal { message, detail } = self {
            log::error!("❌ {}: {}", message, detail);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            message: self.public_message().to_string(),
        })
    }
}
