//! JSON extractor with `validator` checks.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// `Json<T>` followed by `T::validate()`.
///
/// Body errors keep axum's status (400/415/422); validation failures are
/// 400 with per-field details.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct AddressInput {
///     #[validate(length(min = 1))]
///     city: String,
/// }
///
/// async fn update(ValidatedJson(input): ValidatedJson<AddressInput>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
