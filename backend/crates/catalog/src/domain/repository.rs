//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entities::{NewProduct, NewRequestProduct, Product, RequestProduct};
use crate::domain::value_objects::ApprovalStatus;
use crate::error::CatalogResult;

/// Submitter lookup trait (users live in the auth schema)
#[trait_variant::make(SubmitterRepository: Send)]
pub trait LocalSubmitterRepository {
    /// Check whether a user exists for the given email
    async fn exists_by_email(&self, email: &str) -> CatalogResult<bool>;
}

/// Product request repository trait
#[trait_variant::make(RequestProductRepository: Send)]
pub trait LocalRequestProductRepository {
    /// Persist a new request, returning the stored record
    async fn create(&self, request: &NewRequestProduct) -> CatalogResult<RequestProduct>;

    /// Find a request by id
    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<RequestProduct>>;

    /// Snapshot of all requests currently in `status`
    async fn find_by_approval_status(
        &self,
        status: ApprovalStatus,
    ) -> CatalogResult<Vec<RequestProduct>>;

    /// Move a request from `expected` to `target` in one guarded
    /// mutation.
    ///
    /// Returns the updated record, or `None` when the request no
    /// longer carries `expected` (a concurrent decision won).
    async fn update_status_if(
        &self,
        id: i64,
        expected: ApprovalStatus,
        target: ApprovalStatus,
    ) -> CatalogResult<Option<RequestProduct>>;
}

/// Catalog product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Persist a materialized product
    async fn create(&self, product: &NewProduct) -> CatalogResult<Product>;
}
