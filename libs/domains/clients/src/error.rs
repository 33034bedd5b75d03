use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_addresses::AddressError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to create client: {0}")]
    InsertFailed(String),

    #[error("Failed to update client: {0}")]
    UpdateFailed(String),

    #[error("Failed to delete client: {0}")]
    DeleteFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<AddressError> for ClientError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::Validation(msg) => ClientError::Validation(msg),
            AddressError::InsertFailed(msg) => ClientError::InsertFailed(msg),
            AddressError::UpdateFailed(msg) => ClientError::UpdateFailed(msg),
            AddressError::DeleteFailed(msg) => ClientError::DeleteFailed(msg),
            other => ClientError::Internal(other.to_string()),
        }
    }
}

/// Convert ClientError to AppError for standardized error responses
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(id) => AppError::NotFound(format!("Client {} not found", id)),
            ClientError::Validation(msg) => AppError::BadRequest(msg),
            ClientError::InsertFailed(msg)
            | ClientError::UpdateFailed(msg)
            | ClientError::DeleteFailed(msg)
            | ClientError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
