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
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_uuid(Client::Id))
                    .col(string(Client::ClientName))
                    .col(string(Client::ClientSurname))
                    .col(date(Client::Birthday))
                    .col(string(Client::Gender))
                    .col(
                        timestamp_with_time_zone(Client::RegistrationDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(uuid(Client::AddressId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_address_id")
                            .from(Client::Table, Client::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the name + surname search
        manager
            .create_index(
                Index::create()
                    .name("idx_client_name_surname")
                    .table(Client::Table)
                    .col(Client::ClientName)
                    .col(Client::ClientSurname)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Client {
    Table,
    Id,
    ClientName,
    ClientSurname,
    Birthday,
    Gender,
    RegistrationDate,
    AddressId,
}
