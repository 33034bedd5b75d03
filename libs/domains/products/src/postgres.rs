use async_trait::async_trait;
use chrono::Utc;
use domain_suppliers::entity as supplier;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait,
    QueryOrder, SqlErr, Statement, TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, StockPolicy},
    repository::ProductRepository,
};

/// Decrement that only matches while enough stock is left.
const REDUCE_STOCK_GUARDED: &str = "UPDATE product \
     SET available_stock = available_stock - $1, \
         last_update_date = GREATEST(last_update_date, now()) \
     WHERE id = $2 AND available_stock >= $1 \
     RETURNING *";

/// Backorder decrement; only refuses to go below the `int4` floor.
const REDUCE_STOCK_BACKORDER: &str = "UPDATE product \
     SET available_stock = available_stock - $1, \
         last_update_date = GREATEST(last_update_date, now()) \
     WHERE id = $2 AND available_stock::bigint - $1 >= -2147483648 \
     RETURNING *";

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> ProductError {
    ProductError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self, input), fields(supplier_id = %input.supplier_id))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let supplier_id = input.supplier_id;

        let model = entity::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            category: Set(input.category),
            supplier_id: Set(supplier_id),
            image_id: Set(None),
            price: Set(input.price),
            available_stock: Set(input.available_stock),
            last_update_date: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // Supplier deleted between the existence check and the insert
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ProductError::SupplierNotFound(supplier_id)
            }
            _ => ProductError::InsertFailed(e.to_string()),
        })?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn supplier_exists(&self, supplier_id: Uuid) -> ProductResult<bool> {
        let found = supplier::Entity::find_by_id(supplier_id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(found.is_some())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn reduce_stock(&self, id: Uuid, count: i32, policy: StockPolicy) -> ProductResult<Product> {
        let sql = match policy {
            StockPolicy::Reject => REDUCE_STOCK_GUARDED,
            StockPolicy::AllowNegative => REDUCE_STOCK_BACKORDER,
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ProductError::UpdateFailed(e.to_string()))?;

        let updated = entity::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                [count.into(), id.into()],
            ))
            .one(&txn)
            .await
            .map_err(|e| ProductError::UpdateFailed(e.to_string()))?;

        let model = match updated {
            Some(model) => model,
            None => {
                // Tell a missing product apart from a guard miss
                let current = entity::Entity::find_by_id(id)
                    .one(&txn)
                    .await
                    .map_err(db_error)?;

                return Err(match current {
                    Some(product) => ProductError::InsufficientStock {
                        available: product.available_stock,
                        requested: count,
                    },
                    None => ProductError::NotFound(id),
                });
            }
        };

        txn.commit()
            .await
            .map_err(|e| ProductError::UpdateFailed(e.to_string()))?;

        tracing::info!(
            product_id = %id,
            count,
            available_stock = model.available_stock,
            "Reduced product stock"
        );
        Ok(model.into())
    }

    /// Deletes the product and the image it links to, in one transaction.
    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ProductError::DeleteFailed(e.to_string()))?;

        let row = txn
            .query_one_raw(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "DELETE FROM product WHERE id = $1 RETURNING image_id",
                [id.into()],
            ))
            .await
            .map_err(|e| ProductError::DeleteFailed(e.to_string()))?;

        let Some(row) = row else {
            return Ok(false);
        };

        let image_id: Option<Uuid> = row
            .try_get("", "image_id")
            .map_err(|e| ProductError::DeleteFailed(e.to_string()))?;

        if let Some(image_id) = image_id {
            txn.execute_raw(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "DELETE FROM images WHERE id = $1",
                [image_id.into()],
            ))
            .await
            .map_err(|e| ProductError::DeleteFailed(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| ProductError::DeleteFailed(e.to_string()))?;

        tracing::info!(product_id = %id, image_id = ?image_id, "Deleted product");
        Ok(true)
    }
}
