use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Stored address, embedded in client and supplier responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: Uuid,
    pub country: String,
    pub city: String,
    pub street: String,
}

/// Address fields accepted on create and on the owner's PATCH
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddressInput {
    #[validate(length(min = 1, max = 255))]
    pub country: String,
    #[validate(length(min = 1, max = 255))]
    pub city: String,
    #[validate(length(min = 1, max = 255))]
    pub street: String,
}

/// Tables that own an address through an `address_id` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressOwner {
    Client,
    Supplier,
}

impl AddressOwner {
    pub fn table(self) -> &'static str {
        match self {
            AddressOwner::Client => "client",
            AddressOwner::Supplier => "supplier",
        }
    }
}
