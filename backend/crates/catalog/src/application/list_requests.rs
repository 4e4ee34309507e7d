//! List Requests Use Case

use std::sync::Arc;

use crate::domain::entities::RequestProduct;
use crate::domain::repository::RequestProductRepository;
use crate::domain::value_objects::ApprovalStatus;
use crate::error::{CatalogError, CatalogResult};

/// List requests use case
pub struct ListRequestsUseCase<R>
where
    R: RequestProductRepository,
{
    request_repo: Arc<R>,
}

impl<R> ListRequestsUseCase<R>
where
    R: RequestProductRepository,
{
    pub fn new(request_repo: Arc<R>) -> Self {
        Self { request_repo }
    }

    /// Snapshot of all requests in the given status. Pure read, no
    /// pagination.
    pub async fn execute(&self, status: &str) -> CatalogResult<Vec<RequestProduct>> {
        let status = ApprovalStatus::parse(status)
            .ok_or_else(|| CatalogError::InvalidStatus(status.to_string()))?;

        self.request_repo.find_by_approval_status(status).await
    }
}
