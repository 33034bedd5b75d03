use domain_addresses::{Address, AddressInput};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Digits with optional leading `+`, spaces, dashes and parentheses
static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()-]{2,30}$").unwrap());

/// Supplier with its embedded address
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub address_id: Uuid,
    pub address: Address,
}

impl Supplier {
    pub(crate) fn from_parts(model: crate::entity::Model, address: Address) -> Self {
        Self {
            id: model.id,
            name: model.name,
            phone: model.phone_number,
            address_id: model.address_id,
            address,
        }
    }
}

/// DTO for creating a supplier together with its address
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSupplier {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(regex(path = *PHONE_NUMBER))]
    pub phone: String,
    #[validate(nested)]
    pub address: AddressInput,
}
