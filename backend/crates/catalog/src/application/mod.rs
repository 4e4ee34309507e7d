//! Application Layer
//!
//! Use cases for the product-approval workflow.

pub mod decide_approval;
pub mod list_requests;
pub mod submit_request;

// Re-exports
pub use decide_approval::{DecideApprovalInput, DecideApprovalOutput, DecideApprovalUseCase};
pub use list_requests::ListRequestsUseCase;
pub use submit_request::{SubmitRequestInput, SubmitRequestUseCase};
