//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Category is not one of the enumerated set
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Approval status string is not WAIT/SUCCESS/FAILED
    #[error("Invalid approval status: {0}")]
    InvalidStatus(String),

    /// Submitter email does not belong to an existing user
    #[error("User not found for the given email")]
    UserNotFound,

    /// No product request exists for the given id
    #[error("Product request not found")]
    RequestNotFound,

    /// The request already carries the target status, or is terminal
    #[error("Request is already in the target approval status")]
    AlreadyInTargetStatus,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::InvalidCategory(_) | CatalogError::InvalidStatus(_) => {
                StatusCode::BAD_REQUEST
            }
            CatalogError::UserNotFound | CatalogError::RequestNotFound => StatusCode::NOT_FOUND,
            CatalogError::AlreadyInTargetStatus => StatusCode::CONFLICT,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidCategory(_) | CatalogError::InvalidStatus(_) => {
                ErrorKind::BadRequest
            }
            CatalogError::UserNotFound | CatalogError::RequestNotFound => ErrorKind::NotFound,
            CatalogError::AlreadyInTargetStatus => ErrorKind::Conflict,
            CatalogError::Database(_) | CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Field name used to key the failure-envelope reason
    fn reason_field(&self) -> &'static str {
        match self {
            CatalogError::InvalidCategory(_) => "category",
            CatalogError::InvalidStatus(_) | CatalogError::AlreadyInTargetStatus => {
                "approvalStatus"
            }
            CatalogError::UserNotFound => "email",
            CatalogError::RequestNotFound => "requestId",
            CatalogError::Database(_) | CatalogError::Internal(_) => "server",
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
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::AlreadyInTargetStatus => {
                tracing::warn!("Rejected duplicate approval decision");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        CatalogError::Internal(err.to_string())
    }
}
