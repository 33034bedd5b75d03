use async_trait::async_trait;
use domain_products::entity as product;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, QueryFilter, QuerySelect, Statement, TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity,
    error::{ImageError, ImageResult},
    models::ImageInfo,
    repository::ImageRepository,
};

#[derive(Debug, FromQueryResult)]
struct ImageBytes {
    image: Vec<u8>,
}

pub struct PgImageRepository {
    db: DatabaseConnection,
}

impl PgImageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> ImageError {
    ImageError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    #[instrument(skip(self, data), fields(size = data.len()))]
    async fn add_to_product(&self, product_id: Uuid, data: Vec<u8>) -> ImageResult<ImageInfo> {
        let size = data.len();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ImageError::InsertFailed(e.to_string()))?;

        // Row lock: a concurrent upload waits and then sees this image as previous
        let product = product::Entity::find_by_id(product_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or(ImageError::ProductNotFound(product_id))?;
        let previous = product.image_id;

        let image_id = Uuid::now_v7();
        entity::Entity::insert(entity::ActiveModel {
            id: Set(image_id),
            image: Set(data),
        })
        .exec(&txn)
        .await
        .map_err(|e| ImageError::InsertFailed(e.to_string()))?;

        let mut linked = product.into_active_model();
        linked.image_id = Set(Some(image_id));
        linked
            .update(&txn)
            .await
            .map_err(|e| ImageError::InsertFailed(e.to_string()))?;

        // The replaced image is no longer reachable from any product
        if let Some(previous) = previous {
            entity::Entity::delete_by_id(previous)
                .exec(&txn)
                .await
                .map_err(|e| ImageError::InsertFailed(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| ImageError::InsertFailed(e.to_string()))?;

        tracing::info!(image_id = %image_id, product_id = %product_id, "Stored product image");
        Ok(ImageInfo {
            id: image_id,
            product_id: Some(product_id),
            size,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> ImageResult<Option<Vec<u8>>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(|m| m.image))
    }

    async fn get_by_product_id(&self, product_id: Uuid) -> ImageResult<Option<Vec<u8>>> {
        let row = ImageBytes::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT i.image FROM images i JOIN product p ON p.image_id = i.id WHERE p.id = $1",
            [product_id.into()],
        ))
        .one(&self.db)
        .await
        .map_err(db_error)?;

        Ok(row.map(|r| r.image))
    }

    #[instrument(skip(self, data), fields(size = data.len()))]
    async fn update(&self, id: Uuid, data: Vec<u8>) -> ImageResult<Option<ImageInfo>> {
        let size = data.len();

        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Image, Expr::value(data))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ImageError::UpdateFailed(e.to_string()))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let owner = product::Entity::find()
            .filter(product::Column::ImageId.eq(id))
            .one(&self.db)
            .await
            .map_err(db_error)?;

        tracing::info!(image_id = %id, "Replaced image");
        Ok(Some(ImageInfo {
            id,
            product_id: owner.map(|p| p.id),
            size,
        }))
    }

    async fn delete(&self, id: Uuid) -> ImageResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ImageError::DeleteFailed(e.to_string()))?;

        if result.rows_affected > 0 {
            tracing::info!(image_id = %id, "Deleted image");
        }
        Ok(result.rows_affected > 0)
    }
}
