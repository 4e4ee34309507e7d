//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entities::{NewProduct, NewRequestProduct, Product, RequestProduct};
use crate::domain::repository::{
    ProductRepository, RequestProductRepository, SubmitterRepository,
};
use crate::domain::value_objects::{ApprovalStatus, Category};
use crate::error::{CatalogError, CatalogResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SubmitterRepository for PgCatalogRepository {
    async fn exists_by_email(&self, email: &str) -> CatalogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

impl RequestProductRepository for PgCatalogRepository {
    async fn create(&self, request: &NewRequestProduct) -> CatalogResult<RequestProduct> {
        let row = sqlx::query_as::<_, RequestProductRow>(
            r#"
            INSERT INTO request_products (name, brand_name, price, category, approval_status, email)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                request_product_id,
                name,
                brand_name,
                price,
                category,
                approval_status,
                email,
                created_at
            "#,
        )
        .bind(&request.name)
        .bind(&request.brand_name)
        .bind(request.price)
        .bind(request.category.as_str())
        .bind(ApprovalStatus::Wait.as_str())
        .bind(&request.email)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(request_id = row.request_product_id, "Product request created");

        row.into_request_product()
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<RequestProduct>> {
        let row = sqlx::query_as::<_, RequestProductRow>(
            r#"
            SELECT
                request_product_id,
                name,
                brand_name,
                price,
                category,
                approval_status,
                email,
                created_at
            FROM request_products
            WHERE request_product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(RequestProductRow::into_request_product).transpose()
    }

    async fn find_by_approval_status(
        &self,
        status: ApprovalStatus,
    ) -> CatalogResult<Vec<RequestProduct>> {
        let rows = sqlx::query_as::<_, RequestProductRow>(
            r#"
            SELECT
                request_product_id,
                name,
                brand_name,
                price,
                category,
                approval_status,
                email,
                created_at
            FROM request_products
            WHERE approval_status = $1
            ORDER BY request_product_id
            "#,
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(RequestProductRow::into_request_product)
            .collect()
    }

    async fn update_status_if(
        &self,
        id: i64,
        expected: ApprovalStatus,
        target: ApprovalStatus,
    ) -> CatalogResult<Option<RequestProduct>> {
        // Guarded single-statement update: only one concurrent
        // decision can observe the expected status
        let row = sqlx::query_as::<_, RequestProductRow>(
            r#"
            UPDATE request_products
            SET approval_status = $3
            WHERE request_product_id = $1 AND approval_status = $2
            RETURNING
                request_product_id,
                name,
                brand_name,
                price,
                category,
                approval_status,
                email,
                created_at
            "#,
        )
        .bind(id)
        .bind(expected.as_str())
        .bind(target.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                tracing::info!(request_id = id, status = %target, "Request status updated");
                Ok(Some(r.into_request_product()?))
            }
            None => {
                tracing::warn!(request_id = id, "Guarded status update matched no row");
                Ok(None)
            }
        }
    }
}

impl ProductRepository for PgCatalogRepository {
    async fn create(&self, product: &NewProduct) -> CatalogResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, brand_name, price, category, request_product_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING product_id, name, brand_name, price, category, request_product_id, created_at
            "#,
        )
        .bind(&product.name)
        .bind(&product.brand_name)
        .bind(product.price)
        .bind(product.category.as_str())
        .bind(product.request_product_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(product_id = row.product_id, "Product created");

        row.into_product()
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct RequestProductRow {
    request_product_id: i64,
    name: String,
    brand_name: String,
    price: i64,
    category: String,
    approval_status: String,
    email: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl RequestProductRow {
    fn into_request_product(self) -> CatalogResult<RequestProduct> {
        Ok(RequestProduct {
            id: self.request_product_id,
            name: self.name,
            brand_name: self.brand_name,
            price: self.price,
            category: parse_category(&self.category)?,
            approval_status: parse_status(&self.approval_status)?,
            email: self.email,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: i64,
    name: String,
    brand_name: String,
    price: i64,
    category: String,
    request_product_id: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl ProductRow {
    fn into_product(self) -> CatalogResult<Product> {
        Ok(Product {
            id: self.product_id,
            name: self.name,
            brand_name: self.brand_name,
            price: self.price,
            category: parse_category(&self.category)?,
            request_product_id: self.request_product_id,
            created_at: self.created_at,
        })
    }
}

fn parse_category(s: &str) -> CatalogResult<Category> {
    Category::parse(s).ok_or_else(|| CatalogError::Internal(format!("bad stored category: {s}")))
}

fn parse_status(s: &str) -> CatalogResult<ApprovalStatus> {
    ApprovalStatus::parse(s)
        .ok_or_else(|| CatalogError::Internal(format!("bad stored approval status: {s}")))
}
