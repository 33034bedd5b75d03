use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Supplier not found: {0}")]
    SupplierNotFound(Uuid),

    #[error("Insufficient stock: available {available}, requested {requested}")]
    InsufficientStock { available: i32, requested: i32 },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to create product: {0}")]
    InsertFailed(String),

    #[error("Failed to update product: {0}")]
    UpdateFailed(String),

    #[error("Failed to delete product: {0}")]
    DeleteFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::SupplierNotFound(id) => {
                AppError::NotFound(format!("Supplier {} not found", id))
            }
            ProductError::InsufficientStock {
                available,
                requested,
            } => AppError::Conflict(format!(
                "Insufficient stock: {} available, {} requested",
                available, requested
            )),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::InsertFailed(msg)
            | ProductError::UpdateFailed(msg)
            | ProductError::DeleteFailed(msg)
            | ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
