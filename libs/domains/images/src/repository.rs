use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ImageResult;
use crate::models::ImageInfo;

/// Repository trait for image persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Store `data` and link it to the product in one transaction
    async fn add_to_product(&self, product_id: Uuid, data: Vec<u8>) -> ImageResult<ImageInfo>;

    async fn get_by_id(&self, id: Uuid) -> ImageResult<Option<Vec<u8>>>;

    /// Bytes of the image linked to `product_id`
    async fn get_by_product_id(&self, product_id: Uuid) -> ImageResult<Option<Vec<u8>>>;

    /// Replace the bytes; `None` when the image does not exist
    async fn update(&self, id: Uuid, data: Vec<u8>) -> ImageResult<Option<ImageInfo>>;

    async fn delete(&self, id: Uuid) -> ImageResult<bool>;
}
