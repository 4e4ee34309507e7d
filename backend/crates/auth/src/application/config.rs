//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric HS256 signing secret, loaded once at startup
    pub token_secret: Vec<u8>,
    /// Bearer token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Sign-up verification code lifetime (3 hours)
    pub signup_code_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_ttl: Duration::from_secs(3600),              // 1 hour
            signup_code_ttl: Duration::from_secs(3 * 3600),    // 3 hours
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Token TTL in milliseconds
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }

    /// Verification code TTL in milliseconds
    pub fn signup_code_ttl_ms(&self) -> i64 {
        self.signup_code_ttl.as_millis() as i64
    }
}
