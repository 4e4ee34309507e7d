//! Catalog Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::domain::repository::{
    ProductRepository, RequestProductRepository, SubmitterRepository,
};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgCatalogRepository) -> Router {
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/requests",
            get(handlers::list_requests::<PgCatalogRepository>)
                .post(handlers::submit_request::<PgCatalogRepository>),
        )
        .route(
            "/requests/{id}",
            patch(handlers::decide_approval::<PgCatalogRepository>),
        )
        .with_state(state)
}

/// Create a generic catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R) -> Router
where
    R: SubmitterRepository
        + RequestProductRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/requests",
            get(handlers::list_requests::<R>).post(handlers::submit_request::<R>),
        )
        .route("/requests/{id}", patch(handlers::decide_approval::<R>))
        .with_state(state)
}
