use domain_addresses::AddressInput;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{SupplierError, SupplierResult};
use crate::models::{CreateSupplier, Supplier};
use crate::repository::SupplierRepository;

#[derive(Clone)]
pub struct SupplierService<R: SupplierRepository> {
    repository: Arc<R>,
}

impl<R: SupplierRepository> SupplierService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_supplier(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        input
            .validate()
            .map_err(|e| SupplierError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get_supplier(&self, id: Uuid) -> SupplierResult<Supplier> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(SupplierError::NotFound(id))
    }

    pub async fn list_suppliers(&self) -> SupplierResult<Vec<Supplier>> {
        self.repository.list().await
    }

    pub async fn update_supplier_address(
        &self,
        id: Uuid,
        input: AddressInput,
    ) -> SupplierResult<Supplier> {
        input
            .validate()
            .map_err(|e| SupplierError::Validation(e.to_string()))?;

        self.repository.update_address(id, input).await
    }

    /// Fails with `HasProducts` while any product references the supplier
    pub async fn delete_supplier(&self, id: Uuid) -> SupplierResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(SupplierError::NotFound(id))
        }
    }
}
