use domain_addresses::entity as address;
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the client table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_name: String,
    pub client_surname: String,
    pub birthday: Date,
    pub gender: String,
    pub registration_date: DateTimeWithTimeZone,
    pub address_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "address::Entity",
        from = "Column::AddressId",
        to = "address::Column::Id"
    )]
    Address,
}

impl Related<address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
