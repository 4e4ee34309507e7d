//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user exists for the given email
    #[error("User not found for the given email")]
    UserNotFound,

    /// Presented password does not match the stored hash
    #[error("Password does not match")]
    PasswordMismatch,

    /// Token is empty, malformed, or fails signature verification
    #[error("Token is invalid")]
    TokenInvalid,

    /// Token is past its embedded expiry
    #[error("Token has expired")]
    TokenExpired,

    /// Sign-up verification code is unknown or past its TTL
    #[error("Verification code is invalid or expired")]
    InvalidOrExpiredCode,

    /// A durable user already exists for the email being verified
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    /// Email failed format validation
    #[error("Invalid email: {0}")]
    EmailValidation(String),

    /// Password failed policy validation
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::PasswordMismatch => StatusCode::BAD_REQUEST,
            AuthError::TokenInvalid | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::InvalidOrExpiredCode => StatusCode::BAD_REQUEST,
            AuthError::EmailAlreadyRegistered => StatusCode::CONFLICT,
            AuthError::EmailValidation(_) | AuthError::PasswordValidation(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::PasswordMismatch => ErrorKind::BadRequest,
            AuthError::TokenInvalid | AuthError::TokenExpired => ErrorKind::Unauthorized,
            AuthError::InvalidOrExpiredCode => ErrorKind::BadRequest,
            AuthError::EmailAlreadyRegistered => ErrorKind::Conflict,
            AuthError::EmailValidation(_) | AuthError::PasswordValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Field name used to key the failure-envelope reason
    fn reason_field(&self) -> &'static str {
        match self {
            AuthError::UserNotFound
            | AuthError::EmailValidation(_)
            | AuthError::EmailAlreadyRegistered => "email",
            AuthError::PasswordMismatch | AuthError::PasswordValidation(_) => "password",
            AuthError::TokenInvalid | AuthError::TokenExpired => "token",
            AuthError::InvalidOrExpiredCode => "code",
            AuthError::Database(_) | AuthError::Internal(_) => "server",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let message = if self.kind().is_server_error() {
            // Never leak internals to the client
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        AppError::new(self.kind(), message.clone()).with_reason(self.reason_field(), message)
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::PasswordMismatch => {
                tracing::warn!("Login attempt with wrong password");
            }
            AuthError::TokenInvalid => {
                tracing::warn!("Rejected invalid token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
