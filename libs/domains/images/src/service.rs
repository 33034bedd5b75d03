use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ImageError, ImageResult};
use crate::models::ImageInfo;
use crate::repository::ImageRepository;

#[derive(Clone)]
pub struct ImageService<R: ImageRepository> {
    repository: Arc<R>,
}

fn ensure_not_empty(data: &[u8]) -> ImageResult<()> {
    if data.is_empty() {
        return Err(ImageError::Validation("image must not be empty".to_string()));
    }
    Ok(())
}

impl<R: ImageRepository> ImageService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Store an image and make it the product's image
    pub async fn add_image(&self, product_id: Uuid, data: Vec<u8>) -> ImageResult<ImageInfo> {
        ensure_not_empty(&data)?;
        self.repository.add_to_product(product_id, data).await
    }

    pub async fn get_image(&self, id: Uuid) -> ImageResult<Vec<u8>> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ImageError::NotFound(id))
    }

    pub async fn get_product_image(&self, product_id: Uuid) -> ImageResult<Vec<u8>> {
        self.repository
            .get_by_product_id(product_id)
            .await?
            .ok_or(ImageError::NoProductImage(product_id))
    }

    pub async fn update_image(&self, id: Uuid, data: Vec<u8>) -> ImageResult<ImageInfo> {
        ensure_not_empty(&data)?;
        self.repository
            .update(id, data)
            .await?
            .ok_or(ImageError::NotFound(id))
    }

    pub async fn delete_image(&self, id: Uuid) -> ImageResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ImageError::NotFound(id))
        }
    }
}
