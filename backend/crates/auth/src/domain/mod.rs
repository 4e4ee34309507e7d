//! Domain Layer
//!
//! Entities, value objects, the token codec, and repository traits.

pub mod entity;
pub mod repository;
pub mod token;
pub mod value_object;

// Re-exports
pub use entity::{pending_registration::PendingRegistration, user::User};
pub use repository::{PendingRegistrationRepository, UserRepository};
pub use token::{Token, TokenCodec};
pub use value_object::email::Email;
