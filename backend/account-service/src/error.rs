use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AccountError>;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Phone number already in use")]
    PhoneAlreadyExists,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Both current_password and password are required to change password")]
    PasswordChangeIncomplete,

    #[error("Current password is incorrect")]
    InvalidCurrentPassword,

    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("Not enough permissions")]
    Forbidden,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Token error: {0}")]
    Jwt(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AccountError {
    /// HTTP status for the boundary layer
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::EmailAlreadyExists | AccountError::PhoneAlreadyExists => {
                StatusCode::CONFLICT
            }
            AccountError::AccountNotFound => StatusCode::NOT_FOUND,
            AccountError::InvalidCredentials
            | AccountError::InvalidCurrentPassword
            | AccountError::InvalidToken => StatusCode::UNAUTHORIZED,
            AccountError::PasswordChangeIncomplete => StatusCode::BAD_REQUEST,
            AccountError::Forbidden => StatusCode::FORBIDDEN,
            AccountError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AccountError::Database(_) | AccountError::Jwt(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Don't leak internal details to clients
        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// Conversions from external error types
impl From<sqlx::Error> for AccountError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        AccountError::Database(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AccountError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("JWT error: {}", err);
        AccountError::Jwt(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AccountError {
    fn from(err: validator::ValidationErrors) -> Self {
        AccountError::Validation(err.to_string())
    }
}
