//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::RequestProduct;
use crate::domain::value_objects::ApprovalStatus;

/// Request for POST /api/admin/requests
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestRequest {
    pub name: String,
    pub brand_name: String,
    pub price: i64,
    /// Validated against the category set, not by serde
    pub category: String,
    pub email: String,
}

/// Entity for POST /api/admin/requests
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestResponse {
    pub request_id: i64,
    pub status: ApprovalStatus,
    pub email: String,
}

/// Query for GET /api/admin/requests
#[derive(Debug, Clone, Deserialize)]
pub struct ListRequestsQuery {
    pub status: String,
}

/// One request in the GET /api/admin/requests entity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestProductProjection {
    pub request_id: i64,
    pub name: String,
    pub brand_name: String,
    pub price: i64,
    pub category: String,
    pub approval_status: ApprovalStatus,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<RequestProduct> for RequestProductProjection {
    fn from(request: RequestProduct) -> Self {
        Self {
            request_id: request.id,
            name: request.name,
            brand_name: request.brand_name,
            price: request.price,
            category: request.category.as_str().to_string(),
            approval_status: request.approval_status,
            email: request.email,
            created_at: request.created_at,
        }
    }
}

/// Request for PATCH /api/admin/requests/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideApprovalRequest {
    /// Target status string, validated against WAIT/SUCCESS/FAILED
    pub approval_status: String,
    pub email: String,
}

/// Entity for PATCH /api/admin/requests/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideApprovalResponse {
    pub request_id: i64,
    pub status: ApprovalStatus,
    pub decider_email: String,
}
