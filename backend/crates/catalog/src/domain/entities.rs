//! Domain Entities

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{ApprovalStatus, Category};

/// A merchant's product-listing request, submitted in WAIT state
#[derive(Debug, Clone)]
pub struct RequestProduct {
    /// Database identity (BIGSERIAL)
    pub id: i64,
    pub name: String,
    pub brand_name: String,
    pub price: i64,
    pub category: Category,
    pub approval_status: ApprovalStatus,
    /// Email of the submitting user
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A request that has not been persisted yet (no id assigned)
#[derive(Debug, Clone)]
pub struct NewRequestProduct {
    pub name: String,
    pub brand_name: String,
    pub price: i64,
    pub category: Category,
    pub email: String,
}

/// A catalog product, materialized from an approved request
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand_name: String,
    pub price: i64,
    pub category: Category,
    /// The request this product was derived from, at most one product
    /// per request
    pub request_product_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A product derived from a request, not yet persisted
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub brand_name: String,
    pub price: i64,
    pub category: Category,
    pub request_product_id: i64,
}

impl NewProduct {
    /// Copy the descriptive fields of an approved request
    pub fn from_request(request: &RequestProduct) -> Self {
        Self {
            name: request.name.clone(),
            brand_name: request.brand_name.clone(),
            price: request.price,
            category: request.category,
            request_product_id: request.id,
        }
    }
}
