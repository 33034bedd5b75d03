use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, StockPolicy};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; a dangling `supplier_id` fails with `SupplierNotFound`
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn supplier_exists(&self, supplier_id: Uuid) -> ProductResult<bool>;

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Decrement stock by `count` and stamp `last_update_date`
    async fn reduce_stock(&self, id: Uuid, count: i32, policy: StockPolicy) -> ProductResult<Product>;

    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}
