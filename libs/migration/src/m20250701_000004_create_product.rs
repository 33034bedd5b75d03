use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250701_000002_create_supplier::Supplier;
use crate::m20250701_000003_create_images::Images;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_uuid(Product::Id))
                    .col(string(Product::Name))
                    .col(string(Product::Category))
                    .col(uuid(Product::SupplierId))
                    .col(uuid_null(Product::ImageId))
                    .col(double(Product::Price))
                    .col(integer(Product::AvailableStock))
                    .col(
                        timestamp_with_time_zone(Product::LastUpdateDate)
                            .default(Expr::current_timestamp()),
                    )
                    // Suppliers with products cannot be deleted
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_supplier_id")
                            .from(Product::Table, Product::SupplierId)
                            .to(Supplier::Table, Supplier::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_image_id")
                            .from(Product::Table, Product::ImageId)
                            .to(Images::Table, Images::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_supplier_id")
                    .table(Product::Table)
                    .col(Product::SupplierId)
                    .to_owned(),
            )
            .await?;

        // An image belongs to at most one product
        manager
            .create_index(
                Index::create()
                    .name("idx_product_image_id")
                    .table(Product::Table)
                    .col(Product::ImageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Name,
    Category,
    SupplierId,
    ImageId,
    Price,
    AvailableStock,
    LastUpdateDate,
}
