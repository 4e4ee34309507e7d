//! Domain Layer
//!
//! Entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{NewProduct, NewRequestProduct, Product, RequestProduct};
pub use repository::{ProductRepository, RequestProductRepository, SubmitterRepository};
pub use value_objects::{ApprovalStatus, Category};
