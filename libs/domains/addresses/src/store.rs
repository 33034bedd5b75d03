//! Address persistence.
//!
//! Every function is generic over [`ConnectionTrait`] and takes either the
//! pool or an open `DatabaseTransaction`.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DbBackend, EntityTrait, Statement};
use uuid::Uuid;

use crate::{
    entity,
    error::{AddressError, AddressResult},
    models::{Address, AddressInput, AddressOwner},
};

/// Insert a new address with a generated id.
pub async fn insert<C: ConnectionTrait>(conn: &C, input: AddressInput) -> AddressResult<Address> {
    let active_model: entity::ActiveModel = input.into();

    let model = active_model
        .insert(conn)
        .await
        .map_err(|e| AddressError::InsertFailed(e.to_string()))?;

    tracing::info!(address_id = %model.id, "Created address");
    Ok(model.into())
}

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> AddressResult<Option<Address>> {
    let model = entity::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| AddressError::Internal(format!("Database error: {}", e)))?;

    Ok(model.map(Into::into))
}

/// Rewrite the address referenced by `owner`'s row `owner_id`.
///
/// Returns the number of address rows changed; 0 means the owner does not
/// exist.
pub async fn update_for_owner<C: ConnectionTrait>(
    conn: &C,
    owner: AddressOwner,
    owner_id: Uuid,
    input: AddressInput,
) -> AddressResult<u64> {
    let sql = format!(
        "UPDATE address SET country = $1, city = $2, street = $3 \
         WHERE id = (SELECT address_id FROM {} WHERE id = $4)",
        owner.table()
    );

    let result = conn
        .execute_raw(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                input.country.into(),
                input.city.into(),
                input.street.into(),
                owner_id.into(),
            ],
        ))
        .await
        .map_err(|e| AddressError::UpdateFailed(e.to_string()))?;

    tracing::info!(
        owner = owner.table(),
        owner_id = %owner_id,
        rows = result.rows_affected(),
        "Updated address"
    );
    Ok(result.rows_affected())
}

/// Delete an address; `false` when no row had that id.
pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> AddressResult<bool> {
    let result = entity::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(|e| AddressError::DeleteFailed(e.to_string()))?;

    if result.rows_affected > 0 {
        tracing::info!(address_id = %id, "Deleted address");
    }
    Ok(result.rows_affected > 0)
}
