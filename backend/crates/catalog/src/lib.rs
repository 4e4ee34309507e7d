//! Catalog (Product Approval) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Approval Model
//! - A submitted product request starts in WAIT
//! - An admin decision moves it to SUCCESS or FAILED, exactly once
//! - Terminal states are immutable; re-deciding is rejected
//! - The catalog Product is materialized once, on SUCCESS only
//! - The status mutation is a single guarded update, so concurrent
//!   decisions on the same request cannot both win

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::catalog_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCatalogRepository as CatalogStore;
}
