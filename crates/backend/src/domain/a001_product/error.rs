use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_product::{FieldErrors, ProductErrorResponse};
use thiserror::Error;

/// Errors returned by the product API
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Please correct the highlighted fields")]
    Validation(FieldErrors),

    #[error("Invalid or missing credentials")]
    Unauthorized,

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Product not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ProductError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProductError::Unauthorized => StatusCode::UNAUTHORIZED,
            ProductError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ProductError::NotFound => StatusCode::NOT_FOUND,
            ProductError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_body(&self) -> ProductErrorResponse {
        let field_errors = match self {
            ProductError::Validation(errors) => errors.clone(),
            _ => FieldErrors::new(),
        };
        ProductErrorResponse {
            message: self.to_string(),
            field_errors,
        }
    }
}

impl From<anyhow::Error> for ProductError {
    fn from(e: anyhow::Error) -> Self {
        ProductError::Storage(e.to_string())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}
