//! Decide Approval Use Case
//!
//! Applies an admin decision to a WAIT-state request. The status
//! mutation is a single compare-and-swap style update keyed on the
//! expected WAIT state, so two concurrent decisions on the same
//! request cannot both succeed, and the catalog product is
//! materialized at most once.

use std::sync::Arc;

use crate::domain::entities::NewProduct;
use crate::domain::repository::{ProductRepository, RequestProductRepository};
use crate::domain::value_objects::ApprovalStatus;
use crate::error::{CatalogError, CatalogResult};

/// Decide approval input
pub struct DecideApprovalInput {
    pub request_id: i64,
    /// Raw target status string, validated here
    pub target_status: String,
    pub decider_email: String,
}

/// Decide approval output
#[derive(Debug)]
pub struct DecideApprovalOutput {
    pub request_id: i64,
    pub status: ApprovalStatus,
    pub decider_email: String,
}

/// Decide approval use case
pub struct DecideApprovalUseCase<R, P>
where
    R: RequestProductRepository,
    P: ProductRepository,
{
    request_repo: Arc<R>,
    product_repo: Arc<P>,
}

impl<R, P> DecideApprovalUseCase<R, P>
where
    R: RequestProductRepository,
    P: ProductRepository,
{
    pub fn new(request_repo: Arc<R>, product_repo: Arc<P>) -> Self {
        Self {
            request_repo,
            product_repo,
        }
    }

    pub async fn execute(&self, input: DecideApprovalInput) -> CatalogResult<DecideApprovalOutput> {
        let target = ApprovalStatus::parse(&input.target_status)
            .ok_or_else(|| CatalogError::InvalidStatus(input.target_status.clone()))?;

        let request = self
            .request_repo
            .find_by_id(input.request_id)
            .await?
            .ok_or(CatalogError::RequestNotFound)?;

        // Re-applying the same status is rejected, not a no-op, and
        // terminal states accept no further decisions
        if request.approval_status == target || request.approval_status.is_terminal() {
            return Err(CatalogError::AlreadyInTargetStatus);
        }

        let updated = self
            .request_repo
            .update_status_if(input.request_id, ApprovalStatus::Wait, target)
            .await?
            // A concurrent decision got there first
            .ok_or(CatalogError::AlreadyInTargetStatus)?;

        if updated.approval_status == ApprovalStatus::Success {
            let product = self
                .product_repo
                .create(&NewProduct::from_request(&updated))
                .await?;

            tracing::info!(
                request_id = updated.id,
                product_id = product.id,
                "Product materialized from approved request"
            );
        }

        tracing::info!(
            request_id = updated.id,
            status = %updated.approval_status,
            decider = %input.decider_email,
            "Approval decision applied"
        );

        Ok(DecideApprovalOutput {
            request_id: updated.id,
            status: updated.approval_status,
            decider_email: input.decider_email,
        })
    }
}
