//! Sign Up Use Case
//!
//! Starts an email-verified registration: caches the credentials under
//! a random single-use code. No durable user is created here; that
//! happens when the code is redeemed. Delivery of the code (e.g. an
//! emailed link) is an external concern.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::pending_registration::PendingRegistration;
use crate::domain::repository::PendingRegistrationRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up output: the code is returned for out-of-band delivery
#[derive(Debug)]
pub struct SignUpOutput {
    pub email: String,
    pub code: String,
}

/// Sign up use case
pub struct SignUpUseCase<P>
where
    P: PendingRegistrationRepository,
{
    pending_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<P> SignUpUseCase<P>
where
    P: PendingRegistrationRepository,
{
    pub fn new(pending_repo: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            pending_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let email = Email::new(&input.email)?;

        // Policy check happens up front; the plaintext itself stays
        // cached until the code is redeemed
        ClearTextPassword::new(input.password.clone())
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;

        let code = Uuid::new_v4().to_string();

        let registration = PendingRegistration::new(
            code.clone(),
            email.clone(),
            input.password,
            self.config.signup_code_ttl_ms(),
        );

        self.pending_repo.put(&registration).await?;

        tracing::info!(email = %email, "Cached pending registration");

        Ok(SignUpOutput {
            email: email.into_db(),
            code,
        })
    }
}
