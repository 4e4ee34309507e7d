//! Unit tests for auth crate
//! Target: C0 coverage 100%, C1 coverage 80%

#[cfg(test)]
mod token_tests {
    use crate::domain::token::{TOKEN_TYPE, TokenCodec};
    use crate::error::AuthError;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test-secret-test-secret-test-sec")
    }

    #[test]
    fn test_issue_and_extract_email() {
        let codec = codec();
        let token = codec.issue("alice@example.com", 3_600_000).unwrap();

        assert_eq!(token.token_type, TOKEN_TYPE);
        assert_eq!(token.expires_in_ms, 3_600_000);

        let email = codec.extract_claim(&token.value, "email").unwrap();
        assert_eq!(email, "alice@example.com");
    }

    #[test]
    fn test_absent_claim_returns_empty_string() {
        let codec = codec();
        let token = codec.issue("alice@example.com", 3_600_000).unwrap();

        let claim = codec.extract_claim(&token.value, "no-such-claim").unwrap();
        assert_eq!(claim, "");
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let codec = codec();

        let err = codec.extract_claim("not-a-jwt", "email").unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));

        let err = codec.extract_claim("", "email").unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[test]
    fn test_wrong_key_is_invalid_not_expired() {
        let codec = codec();
        let other = TokenCodec::new(b"another-secret-another-secret-an");

        let token = codec.issue("alice@example.com", 3_600_000).unwrap();
        let err = other.extract_claim(&token.value, "email").unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[test]
    fn test_expired_token_is_distinguished() {
        let codec = codec();

        // exp has second granularity; sleep past the boundary
        let token = codec.issue("alice@example.com", 1).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(1100));

        let err = codec.extract_claim(&token.value, "email").unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::AuthConfig;
    use std::time::Duration;

    #[test]
    fn test_default_ttls() {
        let config = AuthConfig::default();

        assert_eq!(config.token_ttl, Duration::from_secs(3600));
        assert_eq!(config.signup_code_ttl, Duration::from_secs(3 * 3600));
        assert_eq!(config.token_ttl_ms(), 3_600_000);
        assert_eq!(config.signup_code_ttl_ms(), 10_800_000);
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();

        assert_ne!(config1.token_secret, config2.token_secret);
        assert!(config1.token_secret.iter().any(|&b| b != 0));
    }
}

#[cfg(test)]
mod domain_tests {
    use crate::domain::entity::pending_registration::PendingRegistration;
    use crate::domain::value_object::email::Email;

    #[test]
    fn test_pending_registration_expiry() {
        let email = Email::new("bob@example.com").unwrap();

        let fresh = PendingRegistration::new(
            "code-1".to_string(),
            email.clone(),
            "hunter2hunter2".to_string(),
            10_800_000,
        );
        assert!(!fresh.is_expired());

        let stale = PendingRegistration::new(
            "code-2".to_string(),
            email,
            "hunter2hunter2".to_string(),
            -1_000,
        );
        assert!(stale.is_expired());
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_token_response_serialization() {
        let response = TokenResponse {
            value: "abc.def.ghi".to_string(),
            expire_time_millis: 3_600_000,
            token_type: "Bearer",
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""value":"abc.def.ghi""#));
        assert!(json.contains(r#""expireTimeMillis":3600000"#));
        assert!(json.contains(r#""type":"Bearer""#));
    }

    #[test]
    fn test_login_request_deserialization() {
        let json = r#"{"email":"alice@example.com","password":"hunter2hunter2"}"#;
        let request: LoginRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "alice@example.com");
        assert_eq!(request.password, "hunter2hunter2");
    }

    #[test]
    fn test_verify_email_request_deserialization() {
        let json = r#"{"code":"8b0fbe1c-6a53-4bb5-9b18-ea0c742c0a11"}"#;
        let request: VerifyEmailRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.code, "8b0fbe1c-6a53-4bb5-9b18-ea0c742c0a11");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::AuthError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
            (AuthError::PasswordMismatch, StatusCode::BAD_REQUEST),
            (AuthError::TokenInvalid, StatusCode::UNAUTHORIZED),
            (AuthError::TokenExpired, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidOrExpiredCode, StatusCode::BAD_REQUEST),
            (AuthError::EmailAlreadyRegistered, StatusCode::CONFLICT),
            (
                AuthError::EmailValidation("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_server_errors_are_masked() {
        let app_error = AuthError::Internal("connection pool exhausted".into()).to_app_error();
        assert!(!app_error.message().contains("connection pool"));
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use platform::password::{ClearTextPassword, hash_password};

    use crate::application::config::AuthConfig;
    use crate::application::login::{LoginInput, LoginUseCase};
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::application::verify_email::VerifyEmailUseCase;
    use crate::domain::entity::pending_registration::PendingRegistration;
    use crate::domain::entity::user::{NewUser, User};
    use crate::domain::repository::{PendingRegistrationRepository, UserRepository};
    use crate::domain::token::TokenCodec;
    use crate::domain::value_object::email::Email;
    use crate::error::{AuthError, AuthResult};

    #[derive(Clone, Default)]
    struct InMemoryAuthRepo {
        users: Arc<Mutex<Vec<User>>>,
        pending: Arc<Mutex<HashMap<String, PendingRegistration>>>,
        next_id: Arc<AtomicI64>,
    }

    impl UserRepository for InMemoryAuthRepo {
        async fn create(&self, new_user: &NewUser) -> AuthResult<User> {
            let mut users = self.users.lock().unwrap();
            // Mirrors the unique constraint on users.email
            if users
                .iter()
                .any(|u| u.email.as_str() == new_user.email.as_str())
            {
                return Err(AuthError::EmailAlreadyRegistered);
            }
            let user = User {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                email: new_user.email.clone(),
                password_hash: new_user.password_hash.clone(),
                created_at: Utc::now(),
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email.as_str() == email.as_str())
                .cloned())
        }
    }

    impl PendingRegistrationRepository for InMemoryAuthRepo {
        async fn put(&self, registration: &PendingRegistration) -> AuthResult<()> {
            self.pending
                .lock()
                .unwrap()
                .insert(registration.code.clone(), registration.clone());
            Ok(())
        }

        async fn consume(&self, code: &str) -> AuthResult<Option<PendingRegistration>> {
            let removed = self.pending.lock().unwrap().remove(code);
            Ok(removed.filter(|r| !r.is_expired()))
        }
    }

    fn fixtures() -> (Arc<InMemoryAuthRepo>, Arc<TokenCodec>, Arc<AuthConfig>) {
        let config = AuthConfig::with_random_secret();
        let codec = TokenCodec::new(&config.token_secret);
        (
            Arc::new(InMemoryAuthRepo::default()),
            Arc::new(codec),
            Arc::new(config),
        )
    }

    async fn seed_user(repo: &InMemoryAuthRepo, email: &str, password: &str) {
        let hash = hash_password(&ClearTextPassword::new(password.to_string()).unwrap()).unwrap();
        repo.create(&NewUser::new(Email::new(email).unwrap(), hash))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let (repo, codec, config) = fixtures();
        seed_user(&repo, "alice@example.com", "correct horse battery").await;

        let use_case = LoginUseCase::new(repo, codec.clone(), config.clone());
        let token = use_case
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in_ms, config.token_ttl_ms());

        let email = codec.extract_claim(&token.value, "email").unwrap();
        assert_eq!(email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_login_normalizes_email_case() {
        let (repo, codec, config) = fixtures();
        seed_user(&repo, "alice@example.com", "correct horse battery").await;

        let use_case = LoginUseCase::new(repo, codec, config);
        let token = use_case
            .execute(LoginInput {
                email: "  Alice@Example.COM ".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await;

        assert!(token.is_ok());
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let (repo, codec, config) = fixtures();

        let use_case = LoginUseCase::new(repo, codec, config);
        let err = use_case
            .execute(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "whatever password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_login_malformed_email_reads_as_unknown_user() {
        let (repo, codec, config) = fixtures();
        seed_user(&repo, "alice@example.com", "correct horse battery").await;

        let use_case = LoginUseCase::new(repo, codec, config);
        let err = use_case
            .execute(LoginInput {
                email: "not-an-email".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (repo, codec, config) = fixtures();
        seed_user(&repo, "alice@example.com", "correct horse battery").await;

        let use_case = LoginUseCase::new(repo, codec, config);
        let err = use_case
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "incorrect horse battery".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PasswordMismatch));
    }

    #[tokio::test]
    async fn test_sign_up_creates_no_user() {
        let (repo, _codec, config) = fixtures();

        let use_case = SignUpUseCase::new(repo.clone(), config);
        let output = use_case
            .execute(SignUpInput {
                email: "bob@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.email, "bob@example.com");
        assert!(!output.code.is_empty());
        assert!(repo.users.lock().unwrap().is_empty());
        assert_eq!(repo.pending.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_weak_password() {
        let (repo, _codec, config) = fixtures();

        let use_case = SignUpUseCase::new(repo.clone(), config);
        let err = use_case
            .execute(SignUpInput {
                email: "bob@example.com".to_string(),
                password: "short".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PasswordValidation(_)));
        assert!(repo.pending.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_then_verify_creates_user() {
        let (repo, codec, config) = fixtures();

        let sign_up = SignUpUseCase::new(repo.clone(), config.clone());
        let output = sign_up
            .execute(SignUpInput {
                email: "bob@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();

        let verify = VerifyEmailUseCase::new(repo.clone(), repo.clone());
        let verified = verify.execute(&output.code).await.unwrap();
        assert_eq!(verified.email, "bob@example.com");

        // The stored credential is a hash, and login works against it
        {
            let users = repo.users.lock().unwrap();
            assert_eq!(users.len(), 1);
            assert_ne!(users[0].password_hash, "hunter2hunter2");
        }

        let login = LoginUseCase::new(repo, codec, config);
        let token = login
            .execute(LoginInput {
                email: "bob@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await;
        assert!(token.is_ok());
    }

    #[tokio::test]
    async fn test_verify_code_is_single_use() {
        let (repo, _codec, config) = fixtures();

        let sign_up = SignUpUseCase::new(repo.clone(), config);
        let output = sign_up
            .execute(SignUpInput {
                email: "bob@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();

        let verify = VerifyEmailUseCase::new(repo.clone(), repo.clone());
        verify.execute(&output.code).await.unwrap();

        let err = verify.execute(&output.code).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidOrExpiredCode));
        assert_eq!(repo.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_verify_for_registered_email_conflicts() {
        let (repo, _codec, config) = fixtures();
        seed_user(&repo, "alice@example.com", "correct horse battery").await;

        let sign_up = SignUpUseCase::new(repo.clone(), config);
        let output = sign_up
            .execute(SignUpInput {
                email: "alice@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();

        let verify = VerifyEmailUseCase::new(repo.clone(), repo.clone());
        let err = verify.execute(&output.code).await.unwrap_err();

        assert!(matches!(err, AuthError::EmailAlreadyRegistered));
        assert_eq!(repo.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_verify_unknown_code() {
        let (repo, _codec, _config) = fixtures();

        let verify = VerifyEmailUseCase::new(repo.clone(), repo);
        let err = verify.execute("no-such-code").await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidOrExpiredCode));
    }

    #[tokio::test]
    async fn test_verify_expired_code() {
        let (repo, _codec, _config) = fixtures();

        let registration = PendingRegistration::new(
            "stale-code".to_string(),
            Email::new("bob@example.com").unwrap(),
            "hunter2hunter2".to_string(),
            -1_000,
        );
        repo.put(&registration).await.unwrap();

        let verify = VerifyEmailUseCase::new(repo.clone(), repo.clone());
        let err = verify.execute("stale-code").await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidOrExpiredCode));
        assert!(repo.users.lock().unwrap().is_empty());
    }
}

#[cfg(test)]
mod middleware_tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use tower::ServiceExt;

    use crate::domain::token::TokenCodec;
    use crate::presentation::middleware::{
        AuthenticatedUser, BearerAuthState, require_bearer_token,
    };

    const SECRET: &[u8] = b"middleware-secret-middleware-sec";

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> impl IntoResponse {
        ([("x-user-email", user.email)], "ok")
    }

    fn guarded_app() -> (Router, Arc<TokenCodec>) {
        let codec = Arc::new(TokenCodec::new(SECRET));
        let app = Router::new().route("/whoami", get(whoami)).layer(
            middleware::from_fn_with_state(
                BearerAuthState::new(codec.clone()),
                require_bearer_token,
            ),
        );
        (app, codec)
    }

    fn request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let (app, _codec) = guarded_app();

        let response = app.oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_unauthorized() {
        let (app, _codec) = guarded_app();

        let response = app
            .oneshot(request(Some("Basic YWxpY2U6aHVudGVyMg==")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_empty_token_after_prefix_is_unauthorized() {
        let (app, _codec) = guarded_app();

        let response = app.oneshot(request(Some("Bearer   "))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let (app, _codec) = guarded_app();

        let response = app
            .oneshot(request(Some("Bearer not-a-jwt")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_foreign_key_token_is_unauthorized() {
        let (app, _codec) = guarded_app();
        let other = TokenCodec::new(b"another-secret-another-secret-an");

        let token = other.issue("alice@example.com", 3_600_000).unwrap();
        let response = app
            .oneshot(request(Some(&format!("Bearer {}", token.value))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthorized() {
        let (app, codec) = guarded_app();

        // exp has second granularity; sleep past the boundary
        let token = codec.issue("alice@example.com", 1).unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

        let response = app
            .oneshot(request(Some(&format!("Bearer {}", token.value))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_without_email_claim_is_unauthorized() {
        let (app, _codec) = guarded_app();

        // Well-signed and unexpired, but carries no email claim
        let mut claims = serde_json::Map::new();
        claims.insert(
            "exp".to_string(),
            serde_json::json!(chrono::Utc::now().timestamp() + 3600),
        );
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let response = app
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_passes_identity_through() {
        let (app, codec) = guarded_app();

        let token = codec.issue("alice@example.com", 3_600_000).unwrap();
        let response = app
            .oneshot(request(Some(&format!("Bearer {}", token.value))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-user-email").unwrap(),
            "alice@example.com"
        );
    }
}
