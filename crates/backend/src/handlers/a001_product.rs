use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_product::{CreateProductRequest, CreateProductResponse, ProductRecord};

use crate::domain::a001_product::{error::ProductError, service};
use crate::shared::data::store::get_product_repository;

/// POST /api/product
pub async fn create(
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreateProductResponse>), ProductError> {
    let created = service::create(get_product_repository(), request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/product
pub async fn list_all() -> Result<Json<Vec<ProductRecord>>, ProductError> {
    service::list_all(get_product_repository()).await.map(Json)
}

/// GET /api/product/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<ProductRecord>, ProductError> {
    service::get_by_id(get_product_repository(), &id).await.map(Json)
}
