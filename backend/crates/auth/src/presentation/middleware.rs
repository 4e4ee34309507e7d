//! Auth Middleware
//!
//! Middleware for requiring a valid bearer token on protected routes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::domain::token::{TOKEN_TYPE, TokenCodec};
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct BearerAuthState {
    pub codec: Arc<TokenCodec>,
}

impl BearerAuthState {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }
}

/// Identity of the caller, stored in request extensions by
/// [`require_bearer_token`]
#[derive(Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Middleware that requires a valid `Authorization: Bearer <token>`
/// header. Expired tokens and malformed ones map to distinct errors,
/// both 401.
pub async fn require_bearer_token(
    axum::extract::State(state): axum::extract::State<BearerAuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer_token(req.headers()) {
        Some(token) => token,
        None => return Err(AuthError::TokenInvalid.into_response()),
    };

    let email = match state.codec.extract_claim(&token, "email") {
        Ok(email) => email,
        Err(e) => return Err(e.into_response()),
    };

    if email.is_empty() {
        return Err(AuthError::TokenInvalid.into_response());
    }

    req.extensions_mut().insert(AuthenticatedUser { email });

    Ok(next.run(req).await)
}

fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let prefix = format!("{TOKEN_TYPE} ");
    value
        .strip_prefix(&prefix)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
