//! UUID path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Single `{id}` path segment parsed as a UUID.
///
/// Malformed ids are rejected with 400 `INVALID_UUID` before the handler runs.
///
/// ```ignore
/// async fn get_client(UuidPath(id): UuidPath) -> String {
///     format!("client {id}")
/// }
///
/// let app = Router::new().route("/client/{id}", get(get_client));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        let id = Uuid::parse_str(&raw)?;
        Ok(UuidPath(id))
    }
}
