//! Domain Entities

pub mod pending_registration;
pub mod user;
