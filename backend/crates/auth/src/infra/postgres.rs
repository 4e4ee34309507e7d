//! PostgreSQL Repository Implementations

use chrono::Utc;
use sqlx::PgPool;

use crate::domain::entity::pending_registration::PendingRegistration;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::{PendingRegistrationRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired pending registrations
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM pending_registrations WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(
            pending_registrations = deleted,
            "Cleaned up expired pending registrations"
        );

        Ok(deleted)
    }
}

impl UserRepository for PgAuthRepository {
    async fn create(&self, new_user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING user_id, email, password_hash, created_at
            "#,
        )
        .bind(new_user.email.as_str())
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // users.email unique violation
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AuthError::EmailAlreadyRegistered
            }
            _ => AuthError::from(e),
        })?;

        tracing::info!(user_id = row.user_id, "User created");

        Ok(row.into_user())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}

impl PendingRegistrationRepository for PgAuthRepository {
    async fn put(&self, registration: &PendingRegistration) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO pending_registrations (code, email, password, expires_at_ms)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&registration.code)
        .bind(registration.email.as_str())
        .bind(&registration.password)
        .bind(registration.expires_at_ms)
        .execute(&self.pool)
        .await?;

        tracing::info!(email = %registration.email, "Pending registration cached");

        Ok(())
    }

    async fn consume(&self, code: &str) -> AuthResult<Option<PendingRegistration>> {
        let now_ms = Utc::now().timestamp_millis();

        // Single-statement delete keeps redemption one-shot under
        // concurrent requests
        let row = sqlx::query_as::<_, PendingRegistrationRow>(
            r#"
            DELETE FROM pending_registrations
            WHERE code = $1 AND expires_at_ms > $2
            RETURNING code, email, password, expires_at_ms, created_at
            "#,
        )
        .bind(code)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                tracing::info!(email = %r.email, "Pending registration consumed");
                Ok(Some(r.into_pending_registration()))
            }
            None => {
                tracing::warn!("Verification code invalid or expired");
                Ok(None)
            }
        }
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    email: String,
    password_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.user_id,
            email: Email::from_db(self.email),
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PendingRegistrationRow {
    code: String,
    email: String,
    password: String,
    expires_at_ms: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl PendingRegistrationRow {
    fn into_pending_registration(self) -> PendingRegistration {
        PendingRegistration {
            code: self.code,
            email: Email::from_db(self.email),
            password: self.password,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}
