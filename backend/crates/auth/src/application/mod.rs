//! Application Layer
//!
//! Use cases and configuration.

pub mod config;
pub mod login;
pub mod sign_up;
pub mod verify_email;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use verify_email::{VerifiedEmailOutput, VerifyEmailUseCase};
