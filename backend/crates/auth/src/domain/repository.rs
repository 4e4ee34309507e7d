//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::{pending_registration::PendingRegistration, user::NewUser, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user, returning the persisted record
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}

/// Pending-registration store trait.
///
/// `consume` must be atomic with the lookup: a code redeems at most
/// one user, even under concurrent redemption attempts.
#[trait_variant::make(PendingRegistrationRepository: Send)]
pub trait LocalPendingRegistrationRepository {
    /// Store a pending registration under its code
    async fn put(&self, registration: &PendingRegistration) -> AuthResult<()>;

    /// Atomically look up and remove the entry for `code`.
    ///
    /// Returns `None` when the code is unknown or past its TTL.
    async fn consume(&self, code: &str) -> AuthResult<Option<PendingRegistration>>;
}
