//! Extractors that reject with [`AppError`](crate::errors::AppError), so every
//! malformed request gets the standard JSON error body.

pub mod uuid_path;
pub mod validated_json;
pub mod validated_query;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
