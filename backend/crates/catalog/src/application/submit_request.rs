//! Submit Request Use Case
//!
//! Accepts a merchant's product-listing request into the approval
//! queue. Category validation happens before any repository call, so
//! a bad category never touches storage.

use std::sync::Arc;

use crate::domain::entities::{NewRequestProduct, RequestProduct};
use crate::domain::repository::{RequestProductRepository, SubmitterRepository};
use crate::domain::value_objects::Category;
use crate::error::{CatalogError, CatalogResult};

/// Submit request input
pub struct SubmitRequestInput {
    pub name: String,
    pub brand_name: String,
    pub price: i64,
    /// Raw category string, validated here
    pub category: String,
    pub email: String,
}

/// Submit request use case
pub struct SubmitRequestUseCase<S, R>
where
    S: SubmitterRepository,
    R: RequestProductRepository,
{
    submitter_repo: Arc<S>,
    request_repo: Arc<R>,
}

impl<S, R> SubmitRequestUseCase<S, R>
where
    S: SubmitterRepository,
    R: RequestProductRepository,
{
    pub fn new(submitter_repo: Arc<S>, request_repo: Arc<R>) -> Self {
        Self {
            submitter_repo,
            request_repo,
        }
    }

    pub async fn execute(&self, input: SubmitRequestInput) -> CatalogResult<RequestProduct> {
        let category = Category::parse(&input.category)
            .ok_or_else(|| CatalogError::InvalidCategory(input.category.clone()))?;

        if !self.submitter_repo.exists_by_email(&input.email).await? {
            return Err(CatalogError::UserNotFound);
        }

        let request = self
            .request_repo
            .create(&NewRequestProduct {
                name: input.name,
                brand_name: input.brand_name,
                price: input.price,
                category,
                email: input.email,
            })
            .await?;

        tracing::info!(
            request_id = request.id,
            category = %request.category,
            "Product request submitted"
        );

        Ok(request)
    }
}
