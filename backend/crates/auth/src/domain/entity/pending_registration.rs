//! Pending Registration Entity
//!
//! Short-lived, single-use record linking a verification code to an
//! unconfirmed sign-up. The password stays in clear text here; it is
//! hashed only when the code is redeemed and the durable user is
//! created.

use chrono::{DateTime, Utc};

use crate::domain::value_object::email::Email;

/// Pending registration entity - one verification code, one sign-up
#[derive(Debug, Clone)]
pub struct PendingRegistration {
    /// Random opaque code (cache key, UUIDv4)
    pub code: String,
    pub email: Email,
    /// Clear-text password, hashed at redemption time
    pub password: String,
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl PendingRegistration {
    /// Create a new pending registration with the given TTL
    pub fn new(code: String, email: Email, password: String, ttl_ms: i64) -> Self {
        let now = Utc::now();
        Self {
            code,
            email,
            password,
            expires_at_ms: now.timestamp_millis() + ttl_ms,
            created_at: now,
        }
    }

    /// Check if the registration has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}
