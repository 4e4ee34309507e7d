//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the backend crates:
//! - Cryptographic utilities (random bytes, Base64)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)

pub mod crypto;
pub mod password;
