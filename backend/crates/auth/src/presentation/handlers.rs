//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use kernel::response::ApiResponse;

use crate::application::config::AuthConfig;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::application::verify_email::VerifyEmailUseCase;
use crate::domain::repository::{PendingRegistrationRepository, UserRepository};
use crate::domain::token::TokenCodec;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, SignUpRequest, SignUpResponse, TokenResponse, VerifyEmailRequest,
    VerifyEmailResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + PendingRegistrationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub codec: Arc<TokenCodec>,
    pub config: Arc<AuthConfig>,
}

/// POST /api/auth/token
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<ApiResponse<TokenResponse>>
where
    R: UserRepository + PendingRegistrationRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.codec.clone(), state.config.clone());

    let token = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::ok(
        "Token issued",
        TokenResponse {
            value: token.value,
            expire_time_millis: token.expires_in_ms,
            token_type: token.token_type,
        },
    ))
}

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<ApiResponse<SignUpResponse>>
where
    R: UserRepository + PendingRegistrationRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::ok(
        "Verification code issued",
        SignUpResponse {
            email: output.email,
            code: output.code,
        },
    ))
}

/// POST /api/auth/signup/verify
pub async fn verify_email<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<VerifyEmailRequest>,
) -> AuthResult<ApiResponse<VerifyEmailResponse>>
where
    R: UserRepository + PendingRegistrationRepository + Clone + Send + Sync + 'static,
{
    let use_case = VerifyEmailUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case.execute(&req.code).await?;

    Ok(ApiResponse::ok(
        "Email verified",
        VerifyEmailResponse {
            email: output.email,
            verified_at: output.verified_at,
        },
    ))
}
