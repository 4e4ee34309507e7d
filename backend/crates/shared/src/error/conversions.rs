//! From-impls for foreign error types, plus the axum rendering of the
//! failure envelope.

use super::app_error::AppError;
use super::kind::ErrorKind;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind as Io;
        let kind = match err.kind() {
            Io::NotFound => ErrorKind::NotFound,
            Io::PermissionDenied => ErrorKind::Forbidden,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        let app_err = if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err))
        } else {
            AppError::internal("JSON serialization error")
        };
        app_err.with_source(err)
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let app_err = match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted")
            }
            sqlx::Error::Io(_) => AppError::service_unavailable("Database connection error"),
            sqlx::Error::Database(db_err) => {
                let code = db_err.code();
                AppError::new(
                    pg_error_kind(code.as_deref()),
                    pg_error_message(code.as_deref()),
                )
            }
            _ => AppError::internal("Database error"),
        };
        app_err.with_source(err)
    }
}

/// Map a PostgreSQL SQLSTATE to an [`ErrorKind`].
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
#[cfg(feature = "sqlx")]
fn pg_error_kind(code: Option<&str>) -> ErrorKind {
    match code {
        // 23xxx: integrity constraint violations are the client's fault
        Some("23502") | Some("23514") => ErrorKind::BadRequest,
        Some("23503") | Some("23505") => ErrorKind::Conflict,
        // 53xxx insufficient resources / 57xxx operator intervention
        Some(c) if c.starts_with("53") || c.starts_with("57") => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
fn pg_error_message(code: Option<&str>) -> &'static str {
    match code {
        Some("23502") => "Required field is null",
        Some("23503") => "Foreign key violation",
        Some("23505") => "Duplicate key value",
        Some("23514") => "Check constraint violation",
        Some(c) if c.starts_with("53") || c.starts_with("57") => "Database unavailable",
        _ => "Database error",
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Failure envelope: {message, reasons: {field: text}}
        let body = serde_json::json!({
            "message": self.message(),
            "reasons": self.reasons(),
        });

        (status, Json(body)).into_response()
    }
}
