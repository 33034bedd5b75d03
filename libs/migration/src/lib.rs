pub use sea_orm_migration::prelude::*;

mod m20250701_000001_create_address;
mod m20250701_000002_create_supplier;
mod m20250701_000003_create_images;
mod m20250701_000004_create_product;
mod m20250701_000005_create_client;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250701_000001_create_address::Migration),
            Box::new(m20250701_000002_create_supplier::Migration),
            Box::new(m20250701_000003_create_images::Migration),
            Box::new(m20250701_000004_create_product::Migration),
            Box::new(m20250701_000005_create_client::Migration),
        ]
    }
}
