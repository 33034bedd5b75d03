use async_trait::async_trait;
use domain_addresses::AddressInput;
use uuid::Uuid;

use crate::error::SupplierResult;
use crate::models::{CreateSupplier, Supplier};

/// Repository trait for Supplier persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Insert the supplier and its address atomically
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier>;

    async fn get_by_id(&self, id: Uuid) -> SupplierResult<Option<Supplier>>;

    async fn list(&self) -> SupplierResult<Vec<Supplier>>;

    async fn update_address(&self, id: Uuid, input: AddressInput) -> SupplierResult<Supplier>;

    /// Delete the supplier and its address; `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> SupplierResult<bool>;
}
