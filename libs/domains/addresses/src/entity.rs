use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub country: String,
    pub city: String,
    pub street: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Address {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            country: model.country,
            city: model.city,
            street: model.street,
        }
    }
}

impl From<crate::models::AddressInput> for ActiveModel {
    fn from(input: crate::models::AddressInput) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            country: Set(input.country),
            city: Set(input.city),
            street: Set(input.street),
        }
    }
}
