use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Descriptor returned by uploads; the bytes themselves are never echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageInfo {
    pub id: Uuid,
    /// Product the image is linked to, if any
    pub product_id: Option<Uuid>,
    /// Stored size in bytes
    pub size: usize,
}

/// Multipart body for image uploads (documentation only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUpload {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}
