//! User Entity
//!
//! Durable account record. Created only once an email verification
//! code has been redeemed; the email is immutable after creation.

use chrono::{DateTime, Utc};

use crate::domain::value_object::email::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database identity (BIGSERIAL)
    pub id: i64,
    /// Unique login email
    pub email: Email,
    /// Argon2id PHC hash string
    pub password_hash: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// A user that has not been persisted yet (no id assigned)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(email: Email, password_hash: String) -> Self {
        Self {
            email,
            password_hash,
        }
    }
}
