//! Auth Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::config::AuthConfig;
use crate::domain::repository::{PendingRegistrationRepository, UserRepository};
use crate::domain::token::TokenCodec;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, codec: Arc<TokenCodec>, config: AuthConfig) -> Router {
    let state = AuthAppState {
        repo: Arc::new(repo),
        codec,
        config: Arc::new(config),
    };

    Router::new()
        .route("/token", post(handlers::login::<PgAuthRepository>))
        .route("/signup", post(handlers::sign_up::<PgAuthRepository>))
        .route(
            "/signup/verify",
            post(handlers::verify_email::<PgAuthRepository>),
        )
        .with_state(state)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, codec: Arc<TokenCodec>, config: AuthConfig) -> Router
where
    R: UserRepository + PendingRegistrationRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        codec,
        config: Arc::new(config),
    };

    Router::new()
        .route("/token", post(handlers::login::<R>))
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signup/verify", post(handlers::verify_email::<R>))
        .with_state(state)
}
