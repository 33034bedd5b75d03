use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, StockPolicy};
use crate::repository::ProductRepository;

#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    stock_policy: StockPolicy,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R, stock_policy: StockPolicy) -> Self {
        Self {
            repository: Arc::new(repository),
            stock_policy,
        }
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.stock_policy
    }

    /// Create a product for an existing supplier
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if !self.repository.supplier_exists(input.supplier_id).await? {
            return Err(ProductError::SupplierNotFound(input.supplier_id));
        }

        self.repository.create(input).await
    }

    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Take `count` units from stock under the configured [`StockPolicy`]
    pub async fn reduce_stock(&self, id: Uuid, count: i32) -> ProductResult<Product> {
        if count < 0 {
            return Err(ProductError::Validation(format!(
                "count must be zero or greater, got {}",
                count
            )));
        }

        self.repository
            .reduce_stock(id, count, self.stock_policy)
            .await
    }

    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}
