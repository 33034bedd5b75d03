use async_trait::async_trait;
use chrono::Utc;
use domain_addresses::{AddressInput, AddressOwner, entity as address, store as address_store};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Statement, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ClientError, ClientResult},
    models::{Client, ClientListParams, ClientSearch, CreateClient},
    repository::ClientRepository,
};

pub struct PgClientRepository {
    db: DatabaseConnection,
}

impl PgClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> ClientError {
    ClientError::Internal(format!("Database error: {}", e))
}

fn joined(row: (entity::Model, Option<address::Model>)) -> ClientResult<Client> {
    let (model, address) = row;
    let address = address
        .ok_or_else(|| ClientError::Internal(format!("Client {} has no address", model.id)))?;
    Ok(Client::from_parts(model, address.into()))
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn create(&self, input: CreateClient) -> ClientResult<Client> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClientError::InsertFailed(e.to_string()))?;

        let address = address_store::insert(&txn, input.address).await?;

        let model = entity::ActiveModel {
            id: Set(Uuid::now_v7()),
            client_name: Set(input.client_name),
            client_surname: Set(input.client_surname),
            birthday: Set(input.birth_date),
            gender: Set(input.gender),
            registration_date: Set(Utc::now().into()),
            address_id: Set(address.id),
        }
        .insert(&txn)
        .await
        .map_err(|e| ClientError::InsertFailed(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| ClientError::InsertFailed(e.to_string()))?;

        tracing::info!(client_id = %model.id, address_id = %address.id, "Created client");
        Ok(Client::from_parts(model, address))
    }

    async fn get_by_id(&self, id: Uuid) -> ClientResult<Option<Client>> {
        let row = entity::Entity::find_by_id(id)
            .find_also_related(address::Entity)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        row.map(joined).transpose()
    }

    async fn list(&self, params: ClientListParams) -> ClientResult<Vec<Client>> {
        let mut query = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .find_also_related(address::Entity);

        if let Some(limit) = params.limit.filter(|l| *l > 0) {
            query = query.limit(limit);
        }
        if let Some(offset) = params.offset.filter(|o| *o > 0) {
            query = query.offset(offset);
        }

        let rows = query.all(&self.db).await.map_err(db_error)?;
        rows.into_iter().map(joined).collect()
    }

    async fn find_by_name_surname(&self, search: ClientSearch) -> ClientResult<Vec<Client>> {
        let rows = entity::Entity::find()
            .filter(entity::Column::ClientName.eq(search.name))
            .filter(entity::Column::ClientSurname.eq(search.surname))
            .order_by_asc(entity::Column::Id)
            .find_also_related(address::Entity)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(joined).collect()
    }

    async fn update_address(&self, id: Uuid, input: AddressInput) -> ClientResult<Client> {
        let rows = address_store::update_for_owner(&self.db, AddressOwner::Client, id, input).await?;
        if rows == 0 {
            return Err(ClientError::NotFound(id));
        }

        tracing::info!(client_id = %id, "Updated client address");
        self.get_by_id(id).await?.ok_or(ClientError::NotFound(id))
    }

    async fn delete(&self, id: Uuid) -> ClientResult<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClientError::DeleteFailed(e.to_string()))?;

        let row = txn
            .query_one_raw(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "DELETE FROM client WHERE id = $1 RETURNING address_id",
                [id.into()],
            ))
            .await
            .map_err(|e| ClientError::DeleteFailed(e.to_string()))?;

        let Some(row) = row else {
            return Ok(false);
        };

        let address_id: Uuid = row
            .try_get("", "address_id")
            .map_err(|e| ClientError::DeleteFailed(e.to_string()))?;
        address_store::delete(&txn, address_id).await?;

        txn.commit()
            .await
            .map_err(|e| ClientError::DeleteFailed(e.to_string()))?;

        tracing::info!(client_id = %id, address_id = %address_id, "Deleted client");
        Ok(true)
    }
}
