//! Success Response Envelope
//!
//! Every successful handler responds with `{message, entity}`. The
//! failing half of the envelope (`{message, reasons}`) is rendered by
//! [`crate::error::app_error::AppError`]'s `IntoResponse` impl.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Success envelope: `{message, entity}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub entity: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with the given message and payload
    pub fn ok(message: impl Into<String>, entity: T) -> Self {
        Self {
            message: message.into(),
            entity,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
