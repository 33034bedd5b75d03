use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Address not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to insert address: {0}")]
    InsertFailed(String),

    #[error("Failed to update address: {0}")]
    UpdateFailed(String),

    #[error("Failed to delete address: {0}")]
    DeleteFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AddressResult<T> = Result<T, AddressError>;

impl From<AddressError> for AppError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::NotFound(id) => AppError::NotFound(format!("Address {} not found", id)),
            AddressError::Validation(msg) => AppError::BadRequest(msg),
            AddressError::InsertFailed(msg)
            | AddressError::UpdateFailed(msg)
            | AddressError::DeleteFailed(msg)
            | AddressError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AddressError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
