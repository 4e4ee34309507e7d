//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, token codec, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Login with email + password, returning a signed Bearer token
//! - Email-verified sign-up via single-use verification codes
//! - Bearer-token middleware for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, only at verification time
//! - Tokens signed HS256 with a process-wide key loaded at startup
//! - Verification codes are consumed atomically (no double redemption)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::token::{Token, TokenCodec};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

#[cfg(test)]
mod tests;
