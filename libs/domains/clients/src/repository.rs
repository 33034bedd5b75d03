use async_trait::async_trait;
use domain_addresses::AddressInput;
use uuid::Uuid;

use crate::error::ClientResult;
use crate::models::{Client, ClientListParams, ClientSearch, CreateClient};

/// Repository trait for Client persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert the client and its address atomically
    async fn create(&self, input: CreateClient) -> ClientResult<Client>;

    async fn get_by_id(&self, id: Uuid) -> ClientResult<Option<Client>>;

    async fn list(&self, params: ClientListParams) -> ClientResult<Vec<Client>>;

    async fn find_by_name_surname(&self, search: ClientSearch) -> ClientResult<Vec<Client>>;

    /// Rewrite the client's address; `NotFound` when the client is missing
    async fn update_address(&self, id: Uuid, input: AddressInput) -> ClientResult<Client>;

    /// Delete the client and its address; `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> ClientResult<bool>;
}
