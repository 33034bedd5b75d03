use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_addresses::AddressError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SupplierError {
    #[error("Supplier not found: {0}")]
    NotFound(Uuid),

    #[error("Supplier {0} still has products")]
    HasProducts(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to create supplier: {0}")]
    InsertFailed(String),

    #[error("Failed to update supplier: {0}")]
    UpdateFailed(String),

    #[error("Failed to delete supplier: {0}")]
    DeleteFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type SupplierResult<T> = Result<T, SupplierError>;

impl From<AddressError> for SupplierError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::Validation(msg) => SupplierError::Validation(msg),
            AddressError::InsertFailed(msg) => SupplierError::InsertFailed(msg),
            AddressError::UpdateFailed(msg) => SupplierError::UpdateFailed(msg),
            AddressError::DeleteFailed(msg) => SupplierError::DeleteFailed(msg),
            other => SupplierError::Internal(other.to_string()),
        }
    }
}

impl From<SupplierError> for AppError {
    fn from(err: SupplierError) -> Self {
        match err {
            SupplierError::NotFound(id) => {
                AppError::NotFound(format!("Supplier {} not found", id))
            }
            SupplierError::HasProducts(id) => AppError::Conflict(format!(
                "Supplier {} still has products and cannot be deleted",
                id
            )),
            SupplierError::Validation(msg) => AppError::BadRequest(msg),
            SupplierError::InsertFailed(msg)
            | SupplierError::UpdateFailed(msg)
            | SupplierError::DeleteFailed(msg)
            | SupplierError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for SupplierError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
