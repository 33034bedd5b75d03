use async_trait::async_trait;
use domain_addresses::{AddressInput, AddressOwner, entity as address, store as address_store};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait,
    QueryOrder, SqlErr, Statement, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{SupplierError, SupplierResult},
    models::{CreateSupplier, Supplier},
    repository::SupplierRepository,
};

pub struct PgSupplierRepository {
    db: DatabaseConnection,
}

impl PgSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> SupplierError {
    SupplierError::Internal(format!("Database error: {}", e))
}

fn joined(row: (entity::Model, Option<address::Model>)) -> SupplierResult<Supplier> {
    let (model, address) = row;
    let address = address
        .ok_or_else(|| SupplierError::Internal(format!("Supplier {} has no address", model.id)))?;
    Ok(Supplier::from_parts(model, address.into()))
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SupplierError::InsertFailed(e.to_string()))?;

        let address = address_store::insert(&txn, input.address).await?;

        let model = entity::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            address_id: Set(address.id),
            phone_number: Set(input.phone),
        }
        .insert(&txn)
        .await
        .map_err(|e| SupplierError::InsertFailed(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| SupplierError::InsertFailed(e.to_string()))?;

        tracing::info!(supplier_id = %model.id, address_id = %address.id, "Created supplier");
        Ok(Supplier::from_parts(model, address))
    }

    async fn get_by_id(&self, id: Uuid) -> SupplierResult<Option<Supplier>> {
        let row = entity::Entity::find_by_id(id)
            .find_also_related(address::Entity)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        row.map(joined).transpose()
    }

    async fn list(&self) -> SupplierResult<Vec<Supplier>> {
        let rows = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .find_also_related(address::Entity)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(joined).collect()
    }

    async fn update_address(&self, id: Uuid, input: AddressInput) -> SupplierResult<Supplier> {
        let rows =
            address_store::update_for_owner(&self.db, AddressOwner::Supplier, id, input).await?;
        if rows == 0 {
            return Err(SupplierError::NotFound(id));
        }

        tracing::info!(supplier_id = %id, "Updated supplier address");
        self.get_by_id(id).await?.ok_or(SupplierError::NotFound(id))
    }

    async fn delete(&self, id: Uuid) -> SupplierResult<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SupplierError::DeleteFailed(e.to_string()))?;

        let row = txn
            .query_one_raw(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "DELETE FROM supplier WHERE id = $1 RETURNING address_id",
                [id.into()],
            ))
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => SupplierError::HasProducts(id),
                _ => SupplierError::DeleteFailed(e.to_string()),
            })?;

        let Some(row) = row else {
            return Ok(false);
        };

        let address_id: Uuid = row
            .try_get("", "address_id")
            .map_err(|e| SupplierError::DeleteFailed(e.to_string()))?;
        address_store::delete(&txn, address_id).await?;

        txn.commit()
            .await
            .map_err(|e| SupplierError::DeleteFailed(e.to_string()))?;

        tracing::info!(supplier_id = %id, address_id = %address_id, "Deleted supplier");
        Ok(true)
    }
}
