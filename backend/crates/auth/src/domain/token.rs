//! Token Codec
//!
//! Issues and validates signed Bearer tokens (HS256 JWT) carrying the
//! subject email and an expiry. The signing key is process-wide,
//! loaded once at startup, and never rotated at runtime.
//!
//! Expiry and malformed-token failures are distinguished so callers
//! can choose between "re-authenticate" and "reject outright".

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AuthError, AuthResult};

/// Token type constant (the only scheme this backend issues)
pub const TOKEN_TYPE: &str = "Bearer";

/// An issued bearer token, never persisted
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    /// Signed opaque value
    pub value: String,
    /// Lifetime granted at issuance, in milliseconds
    pub expires_in_ms: i64,
    /// Always "Bearer"
    pub token_type: &'static str,
}

/// HS256 token codec.
///
/// Purely functional given the fixed key: no I/O, no internal state
/// beyond the derived encoding/decoding keys.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec from the process-wide symmetric secret
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is enforced exactly; no clock-skew allowance
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token embedding `email` as a claim, expiring `ttl_ms`
    /// from now.
    pub fn issue(&self, email: &str, ttl_ms: i64) -> AuthResult<Token> {
        let exp_secs = (Utc::now().timestamp_millis() + ttl_ms) / 1000;

        let mut claims = Map::new();
        claims.insert("email".to_string(), Value::String(email.to_string()));
        claims.insert("exp".to_string(), Value::from(exp_secs));

        let value = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("failed to sign token: {}", e)))?;

        Ok(Token {
            value,
            expires_in_ms: ttl_ms,
            token_type: TOKEN_TYPE,
        })
    }

    /// Verify signature and expiry, then return the named string claim,
    /// or `""` when the claim is absent.
    pub fn extract_claim(&self, token: &str, claim_name: &str) -> AuthResult<String> {
        let data = decode::<Map<String, Value>>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })?;

        Ok(data
            .claims
            .get(claim_name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}
