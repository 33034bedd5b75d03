use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image not found: {0}")]
    NotFound(Uuid),

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Product {0} has no image")]
    NoProductImage(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),

    #[error("Failed to store image: {0}")]
    InsertFailed(String),

    #[error("Failed to update image: {0}")]
    UpdateFailed(String),

    #[error("Failed to delete image: {0}")]
    DeleteFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ImageResult<T> = Result<T, ImageError>;

impl From<ImageError> for AppError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::NotFound(id) => AppError::NotFound(format!("Image {} not found", id)),
            ImageError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            ImageError::NoProductImage(id) => {
                AppError::NotFound(format!("Product {} not found or has no image", id))
            }
            ImageError::Validation(msg) => AppError::BadRequest(msg),
            ImageError::Multipart(e) => AppError::Multipart(e),
            ImageError::MultipartRejection(e) => AppError::MultipartRejection(e),
            ImageError::InsertFailed(msg)
            | ImageError::UpdateFailed(msg)
            | ImageError::DeleteFailed(msg)
            | ImageError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
