//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use kernel::response::ApiResponse;

use crate::application::decide_approval::{DecideApprovalInput, DecideApprovalUseCase};
use crate::application::list_requests::ListRequestsUseCase;
use crate::application::submit_request::{SubmitRequestInput, SubmitRequestUseCase};
use crate::domain::repository::{
    ProductRepository, RequestProductRepository, SubmitterRepository,
};
use crate::error::CatalogResult;
use crate::presentation::dto::{
    DecideApprovalRequest, DecideApprovalResponse, ListRequestsQuery, RequestProductProjection,
    SubmitRequestRequest, SubmitRequestResponse,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: SubmitterRepository
        + RequestProductRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/admin/requests
pub async fn submit_request<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<SubmitRequestRequest>,
) -> CatalogResult<ApiResponse<SubmitRequestResponse>>
where
    R: SubmitterRepository
        + RequestProductRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = SubmitRequestUseCase::new(state.repo.clone(), state.repo.clone());

    let request = use_case
        .execute(SubmitRequestInput {
            name: req.name,
            brand_name: req.brand_name,
            price: req.price,
            category: req.category,
            email: req.email,
        })
        .await?;

    Ok(ApiResponse::ok(
        "Product request submitted",
        SubmitRequestResponse {
            request_id: request.id,
            status: request.approval_status,
            email: request.email,
        },
    ))
}

/// GET /api/admin/requests?status=WAIT
pub async fn list_requests<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<ListRequestsQuery>,
) -> CatalogResult<ApiResponse<Vec<RequestProductProjection>>>
where
    R: SubmitterRepository
        + RequestProductRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListRequestsUseCase::new(state.repo.clone());

    let requests = use_case.execute(&query.status).await?;

    Ok(ApiResponse::ok(
        "Product requests listed",
        requests
            .into_iter()
            .map(RequestProductProjection::from)
            .collect(),
    ))
}

/// PATCH /api/admin/requests/{id}
pub async fn decide_approval<R>(
    State(state): State<CatalogAppState<R>>,
    Path(request_id): Path<i64>,
    Json(req): Json<DecideApprovalRequest>,
) -> CatalogResult<ApiResponse<DecideApprovalResponse>>
where
    R: SubmitterRepository
        + RequestProductRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = DecideApprovalUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case
        .execute(DecideApprovalInput {
            request_id,
            target_status: req.approval_status,
            decider_email: req.email,
        })
        .await?;

    Ok(ApiResponse::ok(
        "Approval decision applied",
        DecideApprovalResponse {
            request_id: output.request_id,
            status: output.status,
            decider_email: output.decider_email,
        },
    ))
}
