//! Verify Email Use Case
//!
//! Redeems a sign-up verification code: atomically consumes the
//! pending registration, hashes the cached password, and creates the
//! durable user. A code redeems at most one user; the atomic consume
//! is what makes concurrent double-redemption impossible.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::password::{ClearTextPassword, hash_password};

use crate::domain::entity::user::NewUser;
use crate::domain::repository::{PendingRegistrationRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Verify email output
#[derive(Debug)]
pub struct VerifiedEmailOutput {
    pub email: String,
    pub verified_at: DateTime<Utc>,
}

/// Verify email use case
pub struct VerifyEmailUseCase<U, P>
where
    U: UserRepository,
    P: PendingRegistrationRepository,
{
    user_repo: Arc<U>,
    pending_repo: Arc<P>,
}

impl<U, P> VerifyEmailUseCase<U, P>
where
    U: UserRepository,
    P: PendingRegistrationRepository,
{
    pub fn new(user_repo: Arc<U>, pending_repo: Arc<P>) -> Self {
        Self {
            user_repo,
            pending_repo,
        }
    }

    pub async fn execute(&self, code: &str) -> AuthResult<VerifiedEmailOutput> {
        let registration = self
            .pending_repo
            .consume(code)
            .await?
            .ok_or(AuthError::InvalidOrExpiredCode)?;

        // The password is hashed here, not at sign-up time
        let password = ClearTextPassword::new(registration.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = hash_password(&password)?;

        let user = self
            .user_repo
            .create(&NewUser::new(registration.email, password_hash))
            .await?;

        tracing::info!(email = %user.email, "Email verified, user created");

        Ok(VerifiedEmailOutput {
            email: user.email.into_db(),
            verified_at: Utc::now(),
        })
    }
}
