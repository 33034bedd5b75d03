use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250701_000001_create_address::Address;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supplier::Table)
                    .if_not_exists()
                    .col(pk_uuid(Supplier::Id))
                    .col(string(Supplier::Name))
                    .col(uuid(Supplier::AddressId))
                    .col(string(Supplier::PhoneNumber))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplier_address_id")
                            .from(Supplier::Table, Supplier::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Supplier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Supplier {
    Table,
    Id,
    Name,
    AddressId,
    PhoneNumber,
}
