//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Request for POST /api/auth/token
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Entity for POST /api/auth/token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub value: String,
    pub expire_time_millis: i64,
    #[serde(rename = "type")]
    pub token_type: &'static str,
}

/// Request for POST /api/auth/signup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

/// Entity for POST /api/auth/signup
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub email: String,
    pub code: String,
}

/// Request for POST /api/auth/signup/verify
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    pub code: String,
}

/// Entity for POST /api/auth/signup/verify
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailResponse {
    pub email: String,
    pub verified_at: chrono::DateTime<chrono::Utc>,
}
