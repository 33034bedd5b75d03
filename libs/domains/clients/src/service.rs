use domain_addresses::AddressInput;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::models::{Client, ClientListParams, ClientSearch, CreateClient};
use crate::repository::ClientRepository;

/// Client use-cases
#[derive(Clone)]
pub struct ClientService<R: ClientRepository> {
    repository: Arc<R>,
}

impl<R: ClientRepository> ClientService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a client and its address
    pub async fn create_client(&self, input: CreateClient) -> ClientResult<Client> {
        input
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get_client(&self, id: Uuid) -> ClientResult<Client> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ClientError::NotFound(id))
    }

    pub async fn list_clients(&self, params: ClientListParams) -> ClientResult<Vec<Client>> {
        self.repository.list(params).await
    }

    pub async fn search_clients(&self, search: ClientSearch) -> ClientResult<Vec<Client>> {
        search
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        self.repository.find_by_name_surname(search).await
    }

    /// Replace the client's address fields
    pub async fn update_client_address(&self, id: Uuid, input: AddressInput) -> ClientResult<Client> {
        input
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        self.repository.update_address(id, input).await
    }

    pub async fn delete_client(&self, id: Uuid) -> ClientResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ClientError::NotFound(id))
        }
    }
}
