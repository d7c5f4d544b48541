use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{ERR_EMAIL_TAKEN, ERR_OPERATION_FAILED};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing failed")]
    PasswordHash,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Post not found")]
    PostNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Seeding is not allowed in production")]
    SeedingDisabled,
}

/// Implement IntoResponse to convert AppError into HTTP responses
///
/// Validation and precondition failures carry a specific message; store
/// failures log the detail and surface a generic one.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, ERR_OPERATION_FAILED)
            }
            AppError::PasswordHash => {
                tracing::error!("Password hashing failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ERR_OPERATION_FAILED)
            }
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::EmailTaken => (StatusCode::CONFLICT, ERR_EMAIL_TAKEN),
            AppError::PostNotFound => (StatusCode::NOT_FOUND, "Post not found"),
            AppError::CategoryNotFound => (StatusCode::NOT_FOUND, "Category not found"),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AppError::SeedingDisabled => (
                StatusCode::FORBIDDEN,
                "Seeding is not allowed in production",
            ),
        };

        let body = Json(json!({
            "success": false,
            "message": message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
