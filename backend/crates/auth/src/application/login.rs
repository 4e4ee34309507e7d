//! Login Use Case
//!
//! Authenticates a user by email + password and issues a Bearer token.

use std::sync::Arc;

use platform::password::{ClearTextPassword, verify_password};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::token::{Token, TokenCodec};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: Arc<TokenCodec>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            codec,
            config,
        }
    }

    /// Read-only flow: find the user, verify the password, issue a
    /// token with the configured TTL. No state is written.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<Token> {
        // A malformed address can never match a stored user
        let email = Email::new(&input.email).map_err(|_| AuthError::UserNotFound)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // A password that fails policy cannot match any stored hash
        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::PasswordMismatch)?;

        if !verify_password(&user.password_hash, &password)? {
            return Err(AuthError::PasswordMismatch);
        }

        let token = self.codec.issue(email.as_str(), self.config.token_ttl_ms())?;

        tracing::info!(email = %email, "Issued bearer token");

        Ok(token)
    }
}
